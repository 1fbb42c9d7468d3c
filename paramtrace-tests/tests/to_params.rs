//! Struct fields as named parameters

use paramtrace::{FormatOptions, ParameterSource, Parameters, ToParams, Value};
use rust_decimal::Decimal;

#[derive(ToParams)]
struct FindOrders {
    #[paramtrace(rename = "CustomerId")]
    customer_id: i32,
    status: Option<String>,
    min_total: Decimal,
    #[paramtrace(skip)]
    #[allow(dead_code)]
    cache_key: String,
}

fn request() -> FindOrders {
    FindOrders {
        customer_id: 42,
        status: None,
        min_total: Decimal::new(1050, 2),
        cache_key: "ignored".into(),
    }
}

#[test]
fn test_param_names_follow_fields() {
    assert_eq!(FindOrders::param_names(), &["CustomerId", "status", "min_total"]);
    assert_eq!(request().param_values()[0], Value::I32(42));
}

#[test]
fn test_struct_to_script() -> anyhow::Result<()> {
    let params = Parameters::from_params(&request())?;
    assert_eq!(params.parameter_names(), vec!["CustomerId", "status", "min_total"]);

    assert_eq!(
        params.to_script(Some("dbo.FindOrders"), &FormatOptions::default()),
        "DECLARE @CustomerId INT = 42\n\
         DECLARE @status NVARCHAR(MAX)\n\
         DECLARE @min_total DECIMAL(4,2) = 10.50\n\
         EXEC dbo.FindOrders\n\
         @CustomerId = @CustomerId,\n\
         @status = @status,\n\
         @min_total = @min_total\n"
    );
    Ok(())
}

#[test]
fn test_struct_params_merge_with_existing() -> anyhow::Result<()> {
    let mut params = Parameters::new();
    params.add("@status", "open")?;
    params.add("@page", 2)?;
    params.add_params(&request())?;

    // status keeps its slot but takes the struct's value
    assert_eq!(
        params.parameter_names(),
        vec!["status", "page", "CustomerId", "min_total"]
    );
    assert_eq!(params.get("status"), Some(&Value::Null));
    Ok(())
}
