//! Product form rules.

use super::{ValidationErrors, non_blank};
use crate::catalog::Product;

/// Categories offered by the product form. Free text is accepted as well.
pub const PRODUCT_CATEGORIES: [&str; 6] = [
    "Shampoo",
    "Conditioner",
    "Styling",
    "Treatment",
    "Tools",
    "Accessories",
];

/// Raw input of the product create/edit form.
///
/// Price and stock arrive as text and are parsed during validation.
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub category: String,
    pub brand: String,
    pub image_url: String,
    pub is_available: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            stock: String::new(),
            category: String::new(),
            brand: String::new(),
            image_url: String::new(),
            is_available: true,
        }
    }
}

impl ProductForm {
    /// Prefills the form from an existing product for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            stock: product.stock_amount.to_string(),
            category: product.category.clone(),
            brand: product.brand.clone(),
            image_url: product.image_url.clone(),
            is_available: product.is_available,
        }
    }

    /// Validates the form and builds a product without an id.
    ///
    /// The store assigns the id on insert; on update the caller supplies it.
    pub fn validate(&self) -> Result<Product, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if non_blank(&self.name).is_none() {
            errors.add("name", "Name is required");
        }
        if non_blank(&self.description).is_none() {
            errors.add("description", "Description is required");
        }

        let mut price = 0.0;
        match non_blank(&self.price) {
            None => errors.add("price", "Price is required"),
            Some(raw) => match raw.parse::<f64>() {
                Ok(value) if !value.is_finite() => errors.add("price", "Invalid price format"),
                Ok(value) if value <= 0.0 => errors.add("price", "Price must be greater than 0"),
                Ok(value) => price = value,
                Err(_) => errors.add("price", "Invalid price format"),
            },
        }

        let mut stock_amount = 0;
        match non_blank(&self.stock) {
            None => errors.add("stock", "Stock quantity is required"),
            Some(raw) => match raw.parse::<i64>() {
                Ok(value) if value < 0 => errors.add("stock", "Stock cannot be negative"),
                Ok(value) => match u32::try_from(value) {
                    Ok(value) => stock_amount = value,
                    Err(_) => errors.add("stock", "Invalid stock format"),
                },
                Err(_) => errors.add("stock", "Invalid stock format"),
            },
        }

        if non_blank(&self.category).is_none() {
            errors.add("category", "Category is required");
        }

        errors.into_result(Product {
            id: String::new(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            stock_amount,
            category: self.category.trim().to_string(),
            brand: self.brand.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            is_available: self.is_available,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProductForm {
        ProductForm {
            name: "Moisture Boost Shampoo".into(),
            description: "Hydrating shampoo".into(),
            price: "19.99".into(),
            stock: "50".into(),
            category: "Shampoo".into(),
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_parses_price_and_stock() {
        let product = form().validate().expect("valid");
        assert_eq!(product.price, 19.99);
        assert_eq!(product.stock_amount, 50);
        assert!(product.id.is_empty());
        assert!(product.brand.is_empty());
        assert!(product.is_available);
    }

    #[test]
    fn test_price_must_be_positive_number() {
        for (raw, expected) in [
            ("", "Price is required"),
            ("0", "Price must be greater than 0"),
            ("-3", "Price must be greater than 0"),
            ("abc", "Invalid price format"),
            ("NaN", "Invalid price format"),
        ] {
            let mut f = form();
            f.price = raw.into();
            let errors = f.validate().unwrap_err();
            assert_eq!(errors.message_for("price"), Some(expected), "{raw}");
        }
    }

    #[test]
    fn test_stock_must_be_non_negative_integer() {
        for (raw, expected) in [
            ("", "Stock quantity is required"),
            ("-1", "Stock cannot be negative"),
            ("2.5", "Invalid stock format"),
        ] {
            let mut f = form();
            f.stock = raw.into();
            let errors = f.validate().unwrap_err();
            assert_eq!(errors.message_for("stock"), Some(expected), "{raw}");
        }
        let mut f = form();
        f.stock = "0".into();
        assert_eq!(f.validate().unwrap().stock_amount, 0);
    }

    #[test]
    fn test_edit_form_round_trips_existing_values() {
        let product = form().validate().unwrap();
        let again = ProductForm::from_product(&product).validate().unwrap();
        assert_eq!(again.name, product.name);
        assert_eq!(again.price, product.price);
        assert_eq!(again.stock_amount, product.stock_amount);
    }
}
