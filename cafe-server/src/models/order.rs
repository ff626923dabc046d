//! Order input model and its shape checks

use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::validation::ValidationError;

/// Raw `POST /cafe/pedido` body.
///
/// Fields stay as untyped JSON so missing and mistyped values produce
/// field-specific messages instead of a serde error string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    /// Name of the item
    #[schema(value_type = String, example = "Latte")]
    pub item: Option<Value>,
    /// How many of the item
    #[schema(value_type = i32, example = 2)]
    pub quantity: Option<Value>,
}

/// Validated order input, ready for the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub item: String,
    pub quantity: i32,
}

impl TryFrom<CreateOrderRequest> for NewOrder {
    type Error = ValidationError;

    fn try_from(req: CreateOrderRequest) -> Result<Self, Self::Error> {
        let item = match req.item {
            None | Some(Value::Null) => return Err(ValidationError::Missing { field: "item" }),
            Some(Value::String(item)) => item,
            Some(_) => {
                return Err(ValidationError::WrongType {
                    field: "item",
                    expected: "a string",
                })
            }
        };

        let quantity = match req.quantity {
            None | Some(Value::Null) => {
                return Err(ValidationError::Missing { field: "quantity" })
            }
            Some(Value::Number(n)) => parse_quantity(&n)?,
            Some(_) => return Err(wrong_quantity_type()),
        };

        Ok(Self { item, quantity })
    }
}

fn parse_quantity(n: &serde_json::Number) -> Result<i32, ValidationError> {
    match n.as_i64() {
        Some(v) => {
            i32::try_from(v).map_err(|_| ValidationError::OutOfRange { field: "quantity" })
        }
        // Integers beyond i64 still parse as u64; anything else is a float.
        None if n.is_u64() => Err(ValidationError::OutOfRange { field: "quantity" }),
        None => Err(wrong_quantity_type()),
    }
}

fn wrong_quantity_type() -> ValidationError {
    ValidationError::WrongType {
        field: "quantity",
        expected: "an integer",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> Result<NewOrder, ValidationError> {
        let req: CreateOrderRequest = serde_json::from_value(body).unwrap();
        NewOrder::try_from(req)
    }

    #[test]
    fn accepts_item_and_quantity() {
        let order = parse(json!({"item": "Latte", "quantity": 2})).unwrap();
        assert_eq!(
            order,
            NewOrder {
                item: "Latte".into(),
                quantity: 2
            }
        );
    }

    #[test]
    fn accepts_zero_and_negative_quantity() {
        assert_eq!(parse(json!({"item": "Mocha", "quantity": 0})).unwrap().quantity, 0);
        assert_eq!(parse(json!({"item": "Mocha", "quantity": -3})).unwrap().quantity, -3);
    }

    #[test]
    fn ignores_unknown_fields() {
        let order = parse(json!({"item": "Chai", "quantity": 1, "table": 4})).unwrap();
        assert_eq!(order.item, "Chai");
    }

    #[test]
    fn missing_or_null_fields() {
        assert_eq!(
            parse(json!({"quantity": 2})),
            Err(ValidationError::Missing { field: "item" })
        );
        assert_eq!(
            parse(json!({"item": "Latte"})),
            Err(ValidationError::Missing { field: "quantity" })
        );
        assert_eq!(
            parse(json!({"item": null, "quantity": 2})),
            Err(ValidationError::Missing { field: "item" })
        );
    }

    #[test]
    fn mistyped_fields() {
        assert!(matches!(
            parse(json!({"item": 5, "quantity": 2})),
            Err(ValidationError::WrongType { field: "item", .. })
        ));
        assert!(matches!(
            parse(json!({"item": "Latte", "quantity": "2"})),
            Err(ValidationError::WrongType { field: "quantity", .. })
        ));
        assert!(matches!(
            parse(json!({"item": "Latte", "quantity": 2.5})),
            Err(ValidationError::WrongType { field: "quantity", .. })
        ));
    }

    #[test]
    fn quantity_beyond_int_column() {
        assert_eq!(
            parse(json!({"item": "Latte", "quantity": 3_000_000_000i64})),
            Err(ValidationError::OutOfRange { field: "quantity" })
        );
        assert_eq!(
            parse(json!({"item": "Latte", "quantity": u64::MAX})),
            Err(ValidationError::OutOfRange { field: "quantity" })
        );
    }
}
