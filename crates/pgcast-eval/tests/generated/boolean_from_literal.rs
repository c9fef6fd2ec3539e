#[allow(unused_variables)]
pub fn eval_cast(
    row: &[::pgcast_types::Value],
    references: &[::pgcast_eval::codegen::ReferenceValue],
) -> ::pgcast_eval::EvalResult<::pgcast_types::Value> {
    let _ = references;
    let literal_0: Option<String> = Some(String::from("\"TrUe\"\n"));
    let value_2: Option<bool> = match &literal_0 {
        None => None,
        Some(input_1) => {
            Some(::pgcast_eval::runtime::string_to_boolean(input_1)?)
        }
    };
    Ok(value_2.map(::pgcast_types::Value::Boolean).unwrap_or(::pgcast_types::Value::Null))
}
