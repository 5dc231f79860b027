//! Generate command tests.

use provider_fixtures::fixtures::run_generate;
use provider_fixtures::generator::{Provider, PRODUCT_TEMPLATES};
use provider_fixtures::populate::{provider_path, GenerateArgs};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;

fn generate_args(root: &Path, seed: Option<u64>) -> GenerateArgs {
    let mut args = GenerateArgs {
        seed,
        create_dirs: true,
        ..GenerateArgs::default()
    };
    args.common.output_dir = root.to_path_buf();
    args
}

fn read_json(root: &Path, provider: Provider) -> Value {
    let content = std::fs::read_to_string(provider_path(root, provider)).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect()
}

/// Items of a provider document, wherever the shape keeps them.
fn items(doc: &Value, provider: Provider) -> &Vec<Value> {
    match provider {
        Provider::TechStore => doc["catalog"]["items"].as_array().unwrap(),
        Provider::FlatCatalog => doc.as_array().unwrap(),
        Provider::WrappedFeed => doc["data"].as_array().unwrap(),
    }
}

#[test]
fn test_default_run_writes_three_shapes() {
    tracing_subscriber::fmt()
        .with_env_filter("provider_fixtures=debug,fixture_populate=debug")
        .try_init()
        .ok();

    let temp_dir = TempDir::new().unwrap();
    let written = run_generate(&generate_args(temp_dir.path(), None)).unwrap();

    let order: Vec<Provider> = written.iter().map(|m| m.provider).collect();
    assert_eq!(order, Provider::ALL.to_vec());

    // Provider 1: nested snake_case
    let p1 = read_json(temp_dir.path(), Provider::TechStore);
    assert_eq!(keys(&p1), vec!["metadata", "catalog"]);
    assert_eq!(keys(&p1["metadata"]), vec!["provider", "version", "timestamp"]);
    assert_eq!(p1["metadata"]["version"], "2.0");
    let first = &items(&p1, Provider::TechStore)[0];
    assert_eq!(
        keys(first),
        vec![
            "product_id",
            "product_name",
            "product_desc",
            "pricing",
            "stock",
            "last_modified"
        ]
    );
    assert_eq!(keys(&first["pricing"]), vec!["amount", "currency_code"]);
    assert_eq!(keys(&first["stock"]), vec!["in_stock", "quantity"]);

    // Provider 2: bare camelCase array
    let p2 = read_json(temp_dir.path(), Provider::FlatCatalog);
    assert!(p2.is_array());
    assert_eq!(
        keys(&items(&p2, Provider::FlatCatalog)[0]),
        vec![
            "itemId",
            "title",
            "details",
            "cost",
            "currencyType",
            "isAvailable",
            "updatedAt"
        ]
    );

    // Provider 3: UPPERCASE wrapper
    let p3 = read_json(temp_dir.path(), Provider::WrappedFeed);
    assert_eq!(keys(&p3), vec!["success", "count", "data"]);
    assert_eq!(p3["success"], true);
    assert_eq!(p3["count"], 50);
    assert_eq!(
        keys(&items(&p3, Provider::WrappedFeed)[0]),
        vec![
            "ID",
            "NAME",
            "DESCRIPTION",
            "PRICE",
            "CURRENCY",
            "AVAILABLE",
            "LAST_UPDATE"
        ]
    );

    for provider in Provider::ALL {
        let doc = read_json(temp_dir.path(), provider);
        assert_eq!(items(&doc, provider).len(), 50);
    }
}

#[test]
fn test_files_are_two_space_indented() {
    let temp_dir = TempDir::new().unwrap();
    run_generate(&generate_args(temp_dir.path(), Some(1))).unwrap();

    let content =
        std::fs::read_to_string(provider_path(temp_dir.path(), Provider::WrappedFeed)).unwrap();
    assert!(content.starts_with("{\n  \"success\": true,\n  \"count\": 50,\n  \"data\": [\n    {\n      \"ID\": \"prod-3-001\","));
}

#[test]
fn test_ids_are_sequential_and_unique() {
    let temp_dir = TempDir::new().unwrap();
    run_generate(&generate_args(temp_dir.path(), None)).unwrap();

    let id_keys = [
        (Provider::TechStore, "product_id"),
        (Provider::FlatCatalog, "itemId"),
        (Provider::WrappedFeed, "ID"),
    ];
    for (provider, key) in id_keys {
        let doc = read_json(temp_dir.path(), provider);
        let ids: Vec<&str> = items(&doc, provider)
            .iter()
            .map(|item| item[key].as_str().unwrap())
            .collect();

        let unique: HashSet<&&str> = ids.iter().collect();
        assert_eq!(unique.len(), 50);
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(*id, format!("prod-{}-{:03}", provider.index(), i + 1));
        }
    }
}

#[test]
fn test_prices_within_bounds() {
    let temp_dir = TempDir::new().unwrap();
    run_generate(&generate_args(temp_dir.path(), None)).unwrap();

    let price_of = |provider: Provider, item: &Value| -> f64 {
        match provider {
            Provider::TechStore => item["pricing"]["amount"].as_f64().unwrap(),
            Provider::FlatCatalog => item["cost"].as_f64().unwrap(),
            Provider::WrappedFeed => item["PRICE"].as_f64().unwrap(),
        }
    };

    for provider in Provider::ALL {
        let (low, high) = provider.price_range();
        let doc = read_json(temp_dir.path(), provider);
        for (i, item) in items(&doc, provider).iter().enumerate() {
            let base = PRODUCT_TEMPLATES[i % 20].base_price;
            let price = price_of(provider, item);
            assert!(price >= base * low - 0.006, "{provider} item {i}: {price}");
            assert!(price <= base * high + 0.006, "{provider} item {i}: {price}");
        }
    }
}

#[test]
fn test_two_runs_differ_only_in_random_fields() {
    let temp_dir = TempDir::new().unwrap();
    let first_root = temp_dir.path().join("first");
    let second_root = temp_dir.path().join("second");
    run_generate(&generate_args(&first_root, None)).unwrap();
    run_generate(&generate_args(&second_root, None)).unwrap();

    let random_fields = [
        "pricing",
        "stock",
        "cost",
        "isAvailable",
        "PRICE",
        "AVAILABLE",
    ];
    let strip = |item: &Value| -> Value {
        let mut item = item.clone();
        let obj = item.as_object_mut().unwrap();
        for field in random_fields {
            obj.remove(field);
        }
        item
    };

    for provider in Provider::ALL {
        let first = read_json(&first_root, provider);
        let second = read_json(&second_root, provider);

        let a: Vec<Value> = items(&first, provider).iter().map(strip).collect();
        let b: Vec<Value> = items(&second, provider).iter().map(strip).collect();
        assert_eq!(a, b);
    }

    assert_eq!(
        read_json(&first_root, Provider::TechStore)["metadata"],
        read_json(&second_root, Provider::TechStore)["metadata"]
    );
}

#[test]
fn test_cyclic_templates_across_file() {
    let temp_dir = TempDir::new().unwrap();
    run_generate(&generate_args(temp_dir.path(), Some(3))).unwrap();

    let doc = read_json(temp_dir.path(), Provider::FlatCatalog);
    let items = items(&doc, Provider::FlatCatalog);
    for i in 0..30 {
        assert_eq!(items[i]["details"], items[i + 20]["details"]);
        assert!(items[i + 20]["title"]
            .as_str()
            .unwrap()
            .starts_with(PRODUCT_TEMPLATES[i % 20].name));
    }
}

#[test]
fn test_missing_directory_fails_fast() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("provider-1")).unwrap();

    let mut args = generate_args(temp_dir.path(), None);
    args.create_dirs = false;

    let err = run_generate(&args).unwrap_err();
    assert!(format!("{err:#}").contains("provider-2"));
    assert!(provider_path(temp_dir.path(), Provider::TechStore).exists());
    assert!(!provider_path(temp_dir.path(), Provider::WrappedFeed).exists());
}

#[test]
fn test_provider_subset() {
    let temp_dir = TempDir::new().unwrap();
    let mut args = generate_args(temp_dir.path(), Some(42));
    args.common.providers = vec![Provider::WrappedFeed];

    let written = run_generate(&args).unwrap();

    assert_eq!(written.len(), 1);
    assert!(!provider_path(temp_dir.path(), Provider::TechStore).exists());
    assert!(provider_path(temp_dir.path(), Provider::WrappedFeed).exists());
}
