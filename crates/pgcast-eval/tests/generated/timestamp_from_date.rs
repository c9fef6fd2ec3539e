#[allow(unused_variables)]
pub fn eval_cast(
    row: &[::pgcast_types::Value],
    references: &[::pgcast_eval::codegen::ReferenceValue],
) -> ::pgcast_eval::EvalResult<::pgcast_types::Value> {
    let zone_3 = ::pgcast_eval::runtime::zone_reference(references, 0)?;
    let column_0: Option<::chrono::NaiveDate> = ::pgcast_eval::runtime::read_date(row, 0)?;
    let value_2: Option<i64> = match &column_0 {
        None => None,
        Some(input_1) => {
            Some(::pgcast_eval::runtime::date_to_timestamp(*input_1, zone_3))
        }
    };
    Ok(value_2.map(::pgcast_types::Value::Timestamp).unwrap_or(::pgcast_types::Value::Null))
}
