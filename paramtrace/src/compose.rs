//! Script composition from a parameter bag

use tracing::debug;

use crate::declare::format_declaration;
use crate::literal::NULL_LITERAL;
use crate::options::FormatOptions;
use crate::params::ParameterSource;

/// Render every parameter of `params` as a declaration, in order.
///
/// When `procedure` is a non-empty name, the declarations are followed by
/// `EXEC <procedure>` and one `@name = @name` argument line per parameter.
/// A missing bag renders as a lone `NULL` line.
pub fn compose<P>(params: Option<&P>, procedure: Option<&str>, options: &FormatOptions) -> String
where
    P: ParameterSource + ?Sized,
{
    let newline = options.newline();
    let Some(params) = params else {
        return format!("{}{}", NULL_LITERAL, newline);
    };

    let names = params.parameter_names();
    let mut declared = Vec::with_capacity(names.len());
    let mut sql = String::new();
    for name in names {
        if let Some(value) = params.get(name) {
            sql.push_str(&format_declaration(name, value, options));
            declared.push(name);
        }
    }

    let procedure = procedure.map(str::trim).filter(|p| !p.is_empty());
    if let Some(procedure) = procedure {
        sql.push_str(&format!("EXEC {}{}", procedure, newline));
        let arguments = declared
            .iter()
            .map(|name| format!("@{name} = @{name}"))
            .collect::<Vec<_>>()
            .join(&format!(",{}", newline));
        if !arguments.is_empty() {
            sql.push_str(&arguments);
            sql.push_str(newline);
        }
    }

    debug!(
        parameters = declared.len(),
        procedure = procedure.unwrap_or_default(),
        bytes = sql.len(),
        "composed parameter script"
    );
    sql
}
