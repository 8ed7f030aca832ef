use log::warn;

const DEFAULT_SIZE_PX: i64 = 7;

/// Interprets the optional startup argument as a picture size.
///
/// Integers pass through verbatim, even undrawable ones; the renderer turns
/// those into a per-roll size error instead of this parser papering over
/// them. Keywords pick one of the two drawable sizes. Anything else falls
/// back to the default.
pub fn parse_size_arg(arg: Option<&str>) -> i64 {
    let Some(token) = arg else {
        return DEFAULT_SIZE_PX;
    };
    if let Ok(px) = token.parse::<i64>() {
        return px;
    }
    match token.to_ascii_lowercase().as_str() {
        "small" | "tiny" => 5,
        "large" | "big" => 7,
        _ => {
            warn!("Ignoring unrecognized size argument `{token}`!");
            DEFAULT_SIZE_PX
        }
    }
}
