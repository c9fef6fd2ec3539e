#[allow(unused_variables)]
pub fn eval_cast(
    row: &[::pgcast_types::Value],
    references: &[::pgcast_eval::codegen::ReferenceValue],
) -> ::pgcast_eval::EvalResult<::pgcast_types::Value> {
    let _ = references;
    let column_0: Option<i64> = ::pgcast_eval::runtime::read_long(row, 0)?;
    let value_2: Option<i64> = match &column_0 {
        None => None,
        Some(input_1) => {
            Some(::pgcast_eval::runtime::seconds_to_timestamp(*input_1))
        }
    };
    Ok(value_2.map(::pgcast_types::Value::Timestamp).unwrap_or(::pgcast_types::Value::Null))
}
