/// Renders a shape the way python prints a tuple: `(2, 3)`, `(10,)`.
pub fn py_tuple(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_owned(),
        [n] => format!("({},)", n),
        _ => {
            let dims: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
            format!("({})", dims.join(", "))
        }
    }
}

pub fn py_bool(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

/// File name tag for a shape: `10_` for `(10,)`, `10x12` for `(10, 12)`.
pub fn shape_tag(shape: &[usize]) -> String {
    if shape.len() == 1 {
        format!("{}_", shape[0])
    } else {
        shape.iter().map(|d| d.to_string()).collect::<Vec<_>>().join("x")
    }
}
