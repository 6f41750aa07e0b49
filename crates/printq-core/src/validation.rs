//! Input validation for order intake.
//!
//! Field-level checks that reject a request before it reaches the store.
//! File entries are re-checked inside the create transaction so a bad file
//! mid-batch rolls the whole operation back.

use rust_decimal::Decimal;

use crate::error::AppError;
use crate::models::{CreateOrderRequest, NewOrderFile};

/// Validate the order-level fields of a creation request.
pub fn validate_create_order(request: &CreateOrderRequest) -> Result<(), AppError> {
    if request.order_id.trim().is_empty() {
        return Err(AppError::InvalidInput("orderId is required".to_string()));
    }
    if request.full_name.trim().is_empty() {
        return Err(AppError::InvalidInput("fullName is required".to_string()));
    }
    if request.copies < 1 {
        return Err(AppError::InvalidInput(
            "copies must be at least 1".to_string(),
        ));
    }
    if request.total_cost < Decimal::ZERO {
        return Err(AppError::InvalidInput(
            "totalCost must not be negative".to_string(),
        ));
    }
    Ok(())
}

/// Validate one file entry of a creation request.
pub fn validate_order_file(file: &NewOrderFile) -> Result<(), AppError> {
    if file.name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "file name is required".to_string(),
        ));
    }
    if file.size < 0 {
        return Err(AppError::InvalidInput(format!(
            "file size must not be negative (file: {})",
            file.name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn request() -> CreateOrderRequest {
        CreateOrderRequest {
            order_id: "ORD-1".to_string(),
            full_name: "Asha Rao".to_string(),
            phone_number: "9876543210".to_string(),
            print_type: "color".to_string(),
            binding_color_type: None,
            copies: 1,
            paper_size: None,
            print_side: None,
            selected_pages: None,
            color_pages: None,
            bw_pages: None,
            special_instructions: None,
            order_date: Utc::now(),
            status: None,
            total_cost: Decimal::ZERO,
            files: Vec::new(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_create_order(&request()).is_ok());
    }

    #[test]
    fn test_blank_order_id_rejected() {
        let mut req = request();
        req.order_id = "  ".to_string();
        assert!(matches!(
            validate_create_order(&req),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_copies_rejected() {
        let mut req = request();
        req.copies = 0;
        assert!(validate_create_order(&req).is_err());
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut req = request();
        req.total_cost = Decimal::new(-100, 2);
        assert!(validate_create_order(&req).is_err());
    }

    #[test]
    fn test_negative_file_size_rejected() {
        let file = NewOrderFile {
            name: "bad.pdf".to_string(),
            size: -1,
            file_type: "application/pdf".to_string(),
            path: None,
        };
        let err = validate_order_file(&file).unwrap_err();
        assert!(err.to_string().contains("bad.pdf"));
    }

    #[test]
    fn test_unnamed_file_rejected() {
        let file = NewOrderFile {
            name: String::new(),
            size: 10,
            file_type: "application/pdf".to_string(),
            path: None,
        };
        assert!(validate_order_file(&file).is_err());
    }
}
