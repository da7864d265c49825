//! Integration tests for the Products domain
//!
//! These tests run against real MongoDB via testcontainers to ensure:
//! - Documents round-trip through the collection
//! - Listing filters are applied by the server, not just built client-side
//! - skip/limit windowing produces stable, non-overlapping pages
//!
//! All tests are `#[ignore]`d because they need Docker.

use domain_products::{
    Color, CreateProduct, MongoProductRepository, ProductQuery, ProductRepository, UpdateProduct,
};
use test_utils::{TestDataBuilder, TestMongo, assertions::assert_some};

fn product(builder: &TestDataBuilder, suffix: &str, price: f64) -> CreateProduct {
    CreateProduct {
        name: builder.name("product", suffix),
        description: "Integration test product".to_string(),
        price,
        original_price: None,
        category: "clothing".to_string(),
        subcategory: None,
        brand: "Atelier".to_string(),
        sizes: vec!["M".to_string()],
        colors: vec![Color {
            name: "White".to_string(),
            hex: "#ffffff".to_string(),
        }],
        images: vec![],
        stock: 5,
        featured: false,
        tags: vec!["test".to_string()],
    }
}

#[tokio::test]
#[ignore] // requires Docker
async fn test_create_and_get_product() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_create_get"));
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let input = product(&builder, "main", 59.9);
    let created = repo.create(input.clone()).await.unwrap();

    assert_eq!(created.name, input.name);
    assert_eq!(created.price, 59.9);
    assert_eq!(created.rating, 0.0);
    assert_eq!(created.review_count, 0);

    let id = created.id.parse().unwrap();
    let retrieved = repo.get_by_id(id).await.unwrap();
    let retrieved = assert_some(retrieved, "product should exist");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.name, created.name);
    assert_eq!(retrieved.colors, created.colors);
}

#[tokio::test]
#[ignore] // requires Docker
async fn test_find_page_windowing() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_windowing"));
    let builder = TestDataBuilder::from_test_name("windowing");

    for i in 1..=7 {
        repo.create(product(&builder, &format!("p{}", i), (i * 10) as f64))
            .await
            .unwrap();
    }

    let query = |page| ProductQuery {
        page,
        page_size: 3,
        sort: Some("price_asc".to_string()),
        ..Default::default()
    };

    assert_eq!(repo.count(&query(1)).await.unwrap(), 7);

    let prices = |products: Vec<domain_products::Product>| {
        products.into_iter().map(|p| p.price).collect::<Vec<_>>()
    };

    let page1 = repo.find_page(&query(1)).await.unwrap();
    assert_eq!(prices(page1), vec![10.0, 20.0, 30.0]);

    let page2 = repo.find_page(&query(2)).await.unwrap();
    assert_eq!(prices(page2), vec![40.0, 50.0, 60.0]);

    let page3 = repo.find_page(&query(3)).await.unwrap();
    assert_eq!(prices(page3), vec![70.0]);

    // Window past the last document is empty, not an error
    let page4 = repo.find_page(&query(4)).await.unwrap();
    assert!(page4.is_empty());
}

#[tokio::test]
#[ignore] // requires Docker
async fn test_filters_applied_by_storage() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_filters"));
    let builder = TestDataBuilder::from_test_name("filters");

    let mut featured_shoes = product(&builder, "shoes", 120.0);
    featured_shoes.category = "shoes".to_string();
    featured_shoes.featured = true;
    repo.create(featured_shoes).await.unwrap();

    let mut plain_shoes = product(&builder, "sandals", 40.0);
    plain_shoes.category = "shoes".to_string();
    repo.create(plain_shoes).await.unwrap();

    repo.create(product(&builder, "shirt", 60.0)).await.unwrap();

    let shoes_only = ProductQuery {
        category: Some("shoes".to_string()),
        ..Default::default()
    };
    assert_eq!(repo.count(&shoes_only).await.unwrap(), 2);

    // featured=false is a real filter, not an absent one
    let unfeatured_shoes = ProductQuery {
        category: Some("shoes".to_string()),
        featured: Some(false),
        ..Default::default()
    };
    let found = repo.find_page(&unfeatured_shoes).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].price, 40.0);

    let priced = ProductQuery {
        min_price: Some(50.0),
        max_price: Some(130.0),
        ..Default::default()
    };
    assert_eq!(repo.count(&priced).await.unwrap(), 2);
}

#[tokio::test]
#[ignore] // requires Docker
async fn test_search_is_case_insensitive() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_search"));
    let builder = TestDataBuilder::from_test_name("search");

    let mut linen = product(&builder, "linen", 59.9);
    linen.description = "Lightweight LINEN shirt".to_string();
    repo.create(linen).await.unwrap();

    repo.create(product(&builder, "denim", 89.9)).await.unwrap();

    let query = ProductQuery {
        search: Some("linen".to_string()),
        ..Default::default()
    };
    let found = repo.find_page(&query).await.unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].description.contains("LINEN"));
}

#[tokio::test]
#[ignore] // requires Docker
async fn test_update_and_delete_roundtrip() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_update_delete"));
    let builder = TestDataBuilder::from_test_name("update_delete");

    let created = repo.create(product(&builder, "main", 99.0)).await.unwrap();
    let id = created.id.parse().unwrap();

    let updated = repo
        .update(
            id,
            UpdateProduct {
                price: Some(79.0),
                featured: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 79.0);
    assert!(updated.featured);
    assert_eq!(updated.name, created.name);

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.get_by_id(id).await.unwrap().is_none());
}
