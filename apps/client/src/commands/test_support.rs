//! Fakes shared by the command tests.

use std::sync::Mutex;

use vela_catalog::{CatalogApi, CatalogError, CatalogResult, ProductQuery};
use vela_core::money::Money;
use vela_core::types::{Category, CategoryId, Product, ProductId, ShippingAddress};
use vela_core::{AuthError, AuthProvider, AuthUser, Credentials, NewLineItem, SignUpForm};

pub fn category(id: i64) -> Category {
    Category {
        id: CategoryId(id),
        name: format!("Category {}", id),
        slug: format!("category-{}", id),
        image: String::new(),
    }
}

pub fn product(id: i64, category_id: i64) -> Product {
    Product {
        id: ProductId(id),
        title: format!("Product {}", id),
        slug: format!("product-{}", id),
        price: Money::from_cents(1000 + id),
        description: String::new(),
        images: vec![format!("https://img.example/{}.png", id)],
        category: category(category_id),
        created_at: None,
        updated_at: None,
    }
}

pub fn line_item(id: i64, cents: i64) -> NewLineItem {
    NewLineItem {
        product_id: ProductId(id),
        title: format!("Product {}", id),
        unit_price: Money::from_cents(cents),
        image_url: String::new(),
        quantity: None,
        size: None,
        color: None,
    }
}

pub fn address() -> ShippingAddress {
    ShippingAddress {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        country: "United Kingdom".to_string(),
        street: "12 St James's Square".to_string(),
        city: "London".to_string(),
        state: None,
        zip_code: "SW1Y 4JH".to_string(),
        phone: "+44 20 7946 0000".to_string(),
    }
}

/// In-memory catalog. `fail_with` turns every call into a 500.
#[derive(Default)]
pub struct FakeCatalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub fail_with: Mutex<Option<String>>,
    pub last_query: Mutex<Option<ProductQuery>>,
}

impl FakeCatalog {
    pub fn with_products(count: i64) -> Self {
        FakeCatalog {
            products: (1..=count).map(|id| product(id, 1 + id % 2)).collect(),
            categories: vec![category(1), category(2)],
            ..Default::default()
        }
    }

    pub fn fail(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    fn check(&self) -> CatalogResult<()> {
        match self.fail_with.lock().unwrap().clone() {
            Some(message) => Err(CatalogError::Api {
                status: 500,
                message,
            }),
            None => Ok(()),
        }
    }
}

impl CatalogApi for FakeCatalog {
    async fn list_products(&self, offset: u32, limit: u32) -> CatalogResult<Vec<Product>> {
        self.check()?;
        Ok(self
            .products
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
        self.check()?;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::Api {
                status: 404,
                message: format!("Could not find any entity of type \"Product\" matching {}", id),
            })
    }

    async fn products_by_category(&self, id: CategoryId) -> CatalogResult<Vec<Product>> {
        self.check()?;
        Ok(self
            .products
            .iter()
            .filter(|p| p.category.id == id)
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        self.check()?;
        Ok(self.categories.clone())
    }

    async fn search_products(&self, query: &ProductQuery) -> CatalogResult<Vec<Product>> {
        self.check()?;
        *self.last_query.lock().unwrap() = Some(query.clone());
        let title = query.title.clone().unwrap_or_default().to_lowercase();
        Ok(self
            .products
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&title))
            .cloned()
            .collect())
    }
}

/// Accepts one known account.
pub struct FakeAuth {
    pub email: String,
    pub password: String,
}

impl Default for FakeAuth {
    fn default() -> Self {
        FakeAuth {
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
        }
    }
}

impl AuthProvider for FakeAuth {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthUser, AuthError> {
        if credentials.email != self.email {
            return Err(AuthError::Provider(
                "Firebase: Error (auth/user-not-found).".to_string(),
            ));
        }
        if credentials.password != self.password {
            return Err(AuthError::Provider(
                "[auth/wrong-password] The password is invalid.".to_string(),
            ));
        }
        Ok(AuthUser {
            uid: "uid-1".to_string(),
            email: Some(credentials.email.clone()),
            display_name: None,
            photo_url: None,
        })
    }

    async fn sign_up(&self, form: &SignUpForm) -> Result<AuthUser, AuthError> {
        if form.email == self.email {
            return Err(AuthError::Provider(
                "[auth/email-already-in-use] The email address is already in use.".to_string(),
            ));
        }
        Ok(AuthUser {
            uid: "uid-2".to_string(),
            email: Some(form.email.clone()),
            display_name: Some(form.name.clone()),
            photo_url: None,
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}
