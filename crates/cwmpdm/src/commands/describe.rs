//! `describe` handler: parameter metadata of one object kind.

use std::fmt::Write as _;

use serde::Serialize;
use tabled::Tabled;

use cwmpdm_model::{Child, CwmpObject, KindVisitor, Parameter};

use crate::cli::DescribeArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Description ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Description {
    object: String,
    cwmp_name: &'static str,
    standard: String,
    parameters: Vec<ParameterInfo>,
    children: Vec<ChildInfo>,
    invariants: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ParameterInfo {
    #[tabled(rename = "Parameter")]
    path: String,
    #[tabled(rename = "Access")]
    access: String,
    #[tabled(rename = "List")]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    #[tabled(display_with = "yes_or_blank")]
    list: bool,
    #[tabled(rename = "Constraint")]
    constraint: String,
}

#[derive(Debug, Serialize, Tabled)]
struct ChildInfo {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Object")]
    object: &'static str,
    #[tabled(rename = "Table")]
    #[tabled(display_with = "yes_or_blank")]
    table: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn yes_or_blank(flag: &bool) -> String {
    if *flag { "yes".into() } else { String::new() }
}

// ── Schema walk ─────────────────────────────────────────────────────

/// Collects metadata for a record type, optionally descending into children.
struct Describe {
    recursive: bool,
}

impl KindVisitor for Describe {
    type Output = (Vec<ParameterInfo>, Vec<ChildInfo>, Vec<String>, &'static str);

    fn visit<T: CwmpObject>(self) -> Self::Output {
        let mut parameters = Vec::new();
        collect(
            "",
            T::parameters(),
            T::children(),
            self.recursive,
            &mut parameters,
        );
        let children = T::children()
            .iter()
            .map(|c| ChildInfo {
                path: c.path_segment(),
                object: c.object,
                table: c.table,
            })
            .collect();
        let invariants = T::invariants().iter().map(ToString::to_string).collect();
        (parameters, children, invariants, T::NAME)
    }
}

/// Parameters in flatten order: leaves, then each child in declaration
/// order. A table contributes its read-only `<Name>NumberOfEntries`
/// counter right before its own subtree.
fn collect(
    prefix: &str,
    parameters: &[Parameter],
    children: &[Child],
    recursive: bool,
    out: &mut Vec<ParameterInfo>,
) {
    for p in parameters {
        out.push(ParameterInfo {
            path: format!("{prefix}{}", p.name),
            access: p.access.to_string(),
            list: p.list,
            constraint: p.constraint.to_string(),
        });
    }
    for child in children {
        if child.table {
            out.push(ParameterInfo {
                path: format!("{prefix}{}NumberOfEntries", child.name),
                access: "R".into(),
                list: false,
                constraint: String::new(),
            });
        }
        if recursive {
            let nested = format!("{prefix}{}", child.path_segment());
            collect(
                &nested,
                (child.parameters)(),
                (child.children)(),
                true,
                out,
            );
        }
    }
}

// ── Table detail view ───────────────────────────────────────────────

fn detail(d: &Description, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}, CWMP name {})",
        output::heading(&d.object, color),
        d.standard,
        d.cwmp_name
    );
    let _ = writeln!(out);
    if d.parameters.is_empty() {
        let _ = writeln!(out, "{}", output::dim("no parameters", color));
    } else {
        let _ = writeln!(out, "{}", output::render_table(&d.parameters));
    }

    if !d.children.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", output::heading("Children", color));
        let _ = writeln!(out, "{}", output::render_table(&d.children));
    }

    if !d.invariants.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", output::heading("Invariants (not enforced)", color));
        for inv in &d.invariants {
            let _ = writeln!(out, "  - {inv}");
        }
    }
    out
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &DescribeArgs, settings: &Settings) -> Result<(), CliError> {
    let kind = util::resolve_kind(&args.object)?;
    let (parameters, children, invariants, cwmp_name) = kind.accept(Describe {
        recursive: args.recursive,
    });

    let description = Description {
        object: kind.to_string(),
        cwmp_name,
        standard: kind.standard().to_string(),
        parameters,
        children,
        invariants,
    };

    let color = output::should_color(settings.color);
    let out = output::render_single(
        settings.output,
        &description,
        |d| detail(d, color),
        |d| {
            d.parameters
                .iter()
                .map(|p| p.path.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        },
    )?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
