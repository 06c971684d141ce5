// ── Object declaration macro ──
//
// One declaration per CWMP object produces the struct, its `Default`,
// serde names, `with_*` builders and the `CwmpObject` metadata, so a
// field's default, name, access and constraint are written exactly once.
//
//   params      field: Type = default => "Name", Access, constraint, with_fn;
//   objects     field: Type => "Name", with_fn;
//   lists       field: Vec<Item> => "Name", Access, constraint, with_item_fn;
//   tables      field: Vec<Entry> => "Name", with_entry_fn;
//   invariants  [Invariant::..., ...]
//
// Sections after `params` are optional but must keep this order.

macro_rules! cwmp_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $xml:literal {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $default:expr => $fxml:literal, $access:ident, $constraint:expr, $with:ident;
            )*
        }
        $(
            objects {
                $(
                    $(#[$ometa:meta])*
                    $ofield:ident : $oty:ty => $oxml:literal, $owith:ident;
                )*
            }
        )?
        $(
            lists {
                $(
                    $(#[$lmeta:meta])*
                    $lfield:ident : Vec<$lty:ty> => $lxml:literal, $laccess:ident, $lconstraint:expr, $lwith:ident;
                )*
            }
        )?
        $(
            tables {
                $(
                    $(#[$tmeta:meta])*
                    $tfield:ident : Vec<$tty:ty> => $txml:literal, $twith:ident;
                )*
            }
        )?
        $(
            invariants [ $($inv:expr),* $(,)? ]
        )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $fxml)]
                pub $field: $ty,
            )*
            $($(
                $(#[$ometa])*
                #[serde(rename = $oxml)]
                pub $ofield: $oty,
            )*)?
            $($(
                $(#[$lmeta])*
                #[serde(rename = $lxml)]
                pub $lfield: Vec<$lty>,
            )*)?
            $($(
                $(#[$tmeta])*
                #[serde(rename = $txml)]
                pub $tfield: Vec<$tty>,
            )*)?
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                    $($( $ofield: <$oty>::default(), )*)?
                    $($( $lfield: Vec::new(), )*)?
                    $($( $tfield: Vec::new(), )*)?
                }
            }
        }

        impl $name {
            $(
                #[doc = concat!("Set `", $fxml, "` and return `self` for chaining.")]
                pub fn $with(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = value.into();
                    self
                }
            )*
            $($(
                #[doc = concat!("Replace the `", $oxml, "` object.")]
                pub fn $owith(mut self, value: $oty) -> Self {
                    self.$ofield = value;
                    self
                }
            )*)?
            $($(
                #[doc = concat!("Append one item to the `", $lxml, "` list.")]
                pub fn $lwith(mut self, item: impl Into<$lty>) -> Self {
                    self.$lfield.push(item.into());
                    self
                }
            )*)?
            $($(
                #[doc = concat!("Append one `", $txml, "` table entry.")]
                pub fn $twith(mut self, entry: $tty) -> Self {
                    self.$tfield.push(entry);
                    self
                }
            )*)?
        }

        impl $crate::schema::CwmpObject for $name {
            const NAME: &'static str = $xml;

            fn parameters() -> &'static [$crate::schema::Parameter] {
                const PARAMETERS: &[$crate::schema::Parameter] = &[
                    $(
                        $crate::schema::Parameter::scalar(
                            $fxml,
                            $crate::schema::Access::$access,
                            $constraint,
                        ),
                    )*
                    $($(
                        $crate::schema::Parameter::list(
                            $lxml,
                            $crate::schema::Access::$laccess,
                            $lconstraint,
                        ),
                    )*)?
                ];
                PARAMETERS
            }

            fn children() -> &'static [$crate::schema::Child] {
                const CHILDREN: &[$crate::schema::Child] = &[
                    $($( $crate::schema::Child::object::<$oty>($oxml), )*)?
                    $($( $crate::schema::Child::table::<$tty>($txml), )*)?
                ];
                CHILDREN
            }

            fn invariants() -> &'static [$crate::schema::Invariant] {
                const INVARIANTS: &[$crate::schema::Invariant] = &[ $($($inv),*)? ];
                INVARIANTS
            }

            #[allow(unused_variables)]
            fn visit_values(
                &self,
                prefix: &str,
                out: &mut Vec<$crate::schema::ParameterValue>,
            ) {
                $(
                    out.push($crate::schema::ParameterValue::new(
                        format!("{}{}", prefix, $fxml),
                        &self.$field,
                        $crate::schema::Access::$access,
                    ));
                )*
                $($(
                    out.push($crate::schema::ParameterValue::new(
                        format!("{}{}", prefix, $lxml),
                        &self.$lfield,
                        $crate::schema::Access::$laccess,
                    ));
                )*)?
                $($(
                    $crate::schema::CwmpObject::visit_values(
                        &self.$ofield,
                        &format!("{}{}.", prefix, $oxml),
                        out,
                    );
                )*)?
                $($(
                    out.push($crate::schema::ParameterValue::new(
                        format!("{}{}NumberOfEntries", prefix, $txml),
                        &self.$tfield.len().to_string(),
                        $crate::schema::Access::ReadOnly,
                    ));
                    for (index, entry) in self.$tfield.iter().enumerate() {
                        $crate::schema::CwmpObject::visit_values(
                            entry,
                            &format!("{}{}.{}.", prefix, $txml, index + 1),
                            out,
                        );
                    }
                )*)?
            }
        }
    };
}
