//! Declarations of scalar parameters

use chrono::NaiveDate;
use paramtrace::{FormatOptions, LineEnding, Parameters, Tracer, Value};
use rust_decimal::Decimal;

fn script(params: &Parameters) -> String {
    params.to_script(None, &FormatOptions::default())
}

#[test]
fn test_integer() {
    let mut params = Parameters::new();
    params.add("@min", i32::MIN).unwrap();
    params.add("@max", i32::MAX).unwrap();
    params.add("@zero", 0).unwrap();

    assert_eq!(
        script(&params),
        "DECLARE @min INT = -2147483648\n\
         DECLARE @max INT = 2147483647\n\
         DECLARE @zero INT = 0\n"
    );
}

#[test]
fn test_string() {
    let mut params = Parameters::new();
    params.add("@name", "String test").unwrap();

    assert_eq!(script(&params), "DECLARE @name NVARCHAR(MAX) = 'String test'\n");
}

#[test]
fn test_string_special_chars() {
    let mut params = Parameters::new();
    params.add("@name", "it's a 'quoted' -- value;").unwrap();

    assert_eq!(
        script(&params),
        "DECLARE @name NVARCHAR(MAX) = 'it''s a ''quoted'' -- value;'\n"
    );
}

#[test]
fn test_null() {
    let mut params = Parameters::new();
    params.add_value("@name", Value::Null).unwrap();
    params.add("@missing", None::<i32>).unwrap();

    assert_eq!(
        script(&params),
        "DECLARE @name NVARCHAR(MAX)\nDECLARE @missing NVARCHAR(MAX)\n"
    );
}

#[test]
fn test_datetime() {
    let min = NaiveDate::from_ymd_opt(1, 1, 1)
        .unwrap()
        .and_hms_milli_opt(0, 0, 0, 0)
        .unwrap();
    let max = NaiveDate::from_ymd_opt(9999, 12, 31)
        .unwrap()
        .and_hms_nano_opt(23, 59, 59, 999_999_999)
        .unwrap();

    let mut params = Parameters::new();
    params.add("@min", min).unwrap();
    params.add("@max", max).unwrap();

    assert_eq!(
        script(&params),
        "DECLARE @min DATETIME = '0001-01-01 00:00:00.000'\n\
         DECLARE @max DATETIME = '9999-12-31 23:59:59.999'\n"
    );
}

#[test]
fn test_bool() {
    let mut params = Parameters::new();
    params.add("@true", true).unwrap();
    params.add("@false", false).unwrap();

    assert_eq!(
        script(&params),
        "DECLARE @true BIT = 1\nDECLARE @false BIT = 0\n"
    );
}

#[test]
fn test_decimal() {
    let mut params = Parameters::new();
    params.add("@min", Decimal::MIN).unwrap();
    params.add("@max", Decimal::MAX).unwrap();
    params.add("@positive", Decimal::new(123456, 4)).unwrap();
    params.add("@negative", Decimal::new(-123456, 4)).unwrap();

    assert_eq!(
        script(&params),
        "DECLARE @min DECIMAL(29,0) = -79228162514264337593543950335\n\
         DECLARE @max DECIMAL(29,0) = 79228162514264337593543950335\n\
         DECLARE @positive DECIMAL(6,4) = 12.3456\n\
         DECLARE @negative DECIMAL(6,4) = -12.3456\n"
    );
}

#[test]
fn test_double() {
    let mut params = Parameters::new();
    params.add("@positive", 12.3456f64).unwrap();
    params.add("@negative", -12.3456f64).unwrap();
    params.add("@small", 0.5f64).unwrap();

    assert_eq!(
        script(&params),
        "DECLARE @positive DECIMAL(6,4) = 12.3456\n\
         DECLARE @negative DECIMAL(6,4) = -12.3456\n\
         DECLARE @small DECIMAL(2,1) = 0.5\n"
    );
}

#[test]
fn test_double_bounds_are_plain_digits() {
    let mut params = Parameters::new();
    params.add("@max", f64::MAX).unwrap();

    let sql = script(&params);
    assert!(sql.starts_with("DECLARE @max DECIMAL(309,0) = 17976931348623157"));
    let (_, literal) = sql.trim_end().split_once(" = ").unwrap();
    assert_eq!(literal.len(), 309);
    assert!(literal.bytes().all(|b| b.is_ascii_digit()));
}

#[test]
fn test_double_negative_bound_excludes_sign_from_precision() {
    let mut params = Parameters::new();
    params.add("@min", f64::MIN).unwrap();

    let sql = script(&params);
    assert!(sql.starts_with("DECLARE @min DECIMAL(309,0) = -17976931348623157"));
    let (_, literal) = sql.trim_end().split_once(" = ").unwrap();
    let digits = literal.strip_prefix('-').unwrap();
    assert_eq!(digits.len(), 309);
    assert!(digits.bytes().all(|b| b.is_ascii_digit()));
}

#[test]
fn test_json() {
    let mut params = Parameters::new();
    params
        .add("@filter", serde_json::json!({"limit": 10, "owner": "O'Hara"}))
        .unwrap();

    assert_eq!(
        script(&params),
        "DECLARE @filter NVARCHAR(MAX) = '{\"limit\":10,\"owner\":\"O''Hara\"}'\n"
    );
}

#[test]
fn test_empty() {
    assert_eq!(script(&Parameters::new()), "");
}

#[test]
fn test_crlf_line_endings() {
    let mut params = Parameters::new();
    params.add("@a", 1).unwrap();
    params.add("@b", 2).unwrap();

    let options = FormatOptions::default().line_ending(LineEnding::CrLf);
    assert_eq!(
        params.to_script(Some("dbo.Sum"), &options),
        "DECLARE @a INT = 1\r\nDECLARE @b INT = 2\r\nEXEC dbo.Sum\r\n@a = @a,\r\n@b = @b\r\n"
    );
}

#[test]
fn test_tracer_get_query_without_parameters() {
    let tracer = Tracer::default();
    assert_eq!(tracer.get_query::<Parameters>(None, Some("dbo.Proc")), "NULL\n");
}
