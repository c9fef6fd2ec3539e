#[allow(unused_variables)]
pub fn eval_cast(
    row: &[::pgcast_types::Value],
    references: &[::pgcast_eval::codegen::ReferenceValue],
) -> ::pgcast_eval::EvalResult<::pgcast_types::Value> {
    let _ = references;
    let column_0: Option<i32> = ::pgcast_eval::runtime::read_integer(row, 0)?;
    let value_2: Option<bool> = match &column_0 {
        None => None,
        Some(input_1) => {
            Some(*input_1 != 0)
        }
    };
    Ok(value_2.map(::pgcast_types::Value::Boolean).unwrap_or(::pgcast_types::Value::Null))
}
