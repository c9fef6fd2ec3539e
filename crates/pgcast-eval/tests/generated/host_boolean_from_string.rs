#[allow(unused_variables)]
pub fn eval_cast(
    row: &[::pgcast_types::Value],
    references: &[::pgcast_eval::codegen::ReferenceValue],
) -> ::pgcast_eval::EvalResult<::pgcast_types::Value> {
    let _ = references;
    let column_0: Option<String> = ::pgcast_eval::runtime::read_string(row, 0)?;
    let value_2: Option<bool> = match &column_0 {
        None => None,
        Some(input_1) => {
            ::pgcast_eval::truth::classify(input_1).as_bool()
        }
    };
    Ok(value_2.map(::pgcast_types::Value::Boolean).unwrap_or(::pgcast_types::Value::Null))
}
