//! Composite type-descriptor formatting.
//!
//! Builds the opaque descriptor strings the core stores. The core never
//! parses these back; they only have to be stable and readable in dumps.

/// Cap on function arguments consumed from a descriptor line.
const MAX_ARGS: usize = 100;
/// Cap on struct/union field pairs consumed from a descriptor line.
const MAX_FIELDS: usize = 50;

/// Format a base type plus raw parameter text into a descriptor:
///
/// - `FUNCTION` + `RET A B` becomes `FUNCTION,RET<==(A,B)`
/// - `STRUCT`/`UNION` + `T1 n1 T2 n2` becomes `STRUCT,{(T1,n1),(T2,n2)}`
/// - anything else keeps its parameters verbatim: `ARRAY` + `INT 10`
///   becomes `ARRAY,INT 10`, and a bare base type stays as-is.
pub fn format_type(base: &str, params: &str) -> String {
    let params = params.trim();
    match base {
        "FUNCTION" => {
            let mut tokens = params.split_whitespace();
            let return_type = tokens.next().unwrap_or("");
            let args: Vec<&str> = tokens.take(MAX_ARGS - 1).collect();
            format!("FUNCTION,{return_type}<==({})", args.join(","))
        }
        "STRUCT" | "UNION" => {
            let mut tokens = params.split_whitespace();
            let mut fields = Vec::new();
            while fields.len() < MAX_FIELDS - 1 {
                // A trailing unpaired token is dropped.
                let (Some(ty), Some(name)) = (tokens.next(), tokens.next()) else {
                    break;
                };
                fields.push(format!("({ty},{name})"));
            }
            format!("{base},{{{}}}", fields.join(","))
        }
        _ if params.is_empty() => base.to_string(),
        _ => format!("{base},{params}"),
    }
}
