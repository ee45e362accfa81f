//! End-to-end tests for Kotlin generation: manifest in, rendered sources out.

use std::str::FromStr;

use batis_codegen::{CommentConfig, DefaultCommentGenerator, GeneratedFile};
use batis_codegen_kotlin::{KotlinGenerator, KotlinPluginChain};
use batis_schema::Manifest;
use chrono::{TimeZone, Utc};

const CUSTOMER_MANIFEST: &str = r#"
    [generator]
    targets = ["kotlin"]
    model_package = "com.acme.model"
    mapper_package = "com.acme.mapper"

    [comments]
    add_remark_comments = true

    [tables.customer]
    remarks = "holds customer records"

    [tables.customer.columns.cust_id]
    type = "java.lang.Long"
    primary_key = true
    remarks = "surrogate key"

    [tables.customer.columns.cust_name]
    type = "java.lang.String"
"#;

fn generate(manifest_toml: &str) -> Vec<GeneratedFile> {
    let manifest = Manifest::from_str(manifest_toml).expect("manifest should parse");
    let config = CommentConfig::from_options(&manifest.comments).expect("comment config");
    let instant = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let hook = DefaultCommentGenerator::at(config, instant);
    let plugins = KotlinPluginChain::new();
    KotlinGenerator::new(&manifest, &hook, &plugins)
        .generate()
        .expect("generation should succeed")
}

fn content<'a>(files: &'a [GeneratedFile], suffix: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.path().to_string_lossy().ends_with(suffix))
        .unwrap_or_else(|| panic!("missing generated file ending in {suffix}"))
        .content()
}

#[test]
fn test_generated_paths() {
    let files = generate(CUSTOMER_MANIFEST);
    let paths: Vec<String> = files
        .iter()
        .map(|f| f.path().display().to_string())
        .collect();
    assert_eq!(
        paths,
        [
            "src/main/kotlin/com/acme/model/Customer.kt",
            "src/main/kotlin/com/acme/mapper/CustomerMapper.kt",
        ]
    );
}

#[test]
fn test_customer_data_class_is_rendered_exactly() {
    let files = generate(CUSTOMER_MANIFEST);
    let expected = "\
package com.acme.model

import javax.annotation.Generated

/**
 * Database Table: customer
 *   holds customer records
 *
 * @date 2024-01-15T10:30:00Z
 */
@Generated(value=\"batis-codegen\", date=\"2024-01-15T10:30:00Z\", comments=\"Source Table: customer\")
data class Customer(
    @Generated(value=\"batis-codegen\", date=\"2024-01-15T10:30:00Z\", comments=\"Source field: customer.cust_id\")
    var custId: Long? = null,
    @Generated(value=\"batis-codegen\", date=\"2024-01-15T10:30:00Z\", comments=\"Source field: customer.cust_name\")
    var custName: String? = null
)
";
    assert_eq!(content(&files, "model/Customer.kt"), expected);
}

#[test]
fn test_mapper_file_contents() {
    let files = generate(CUSTOMER_MANIFEST);
    let mapper = content(&files, "mapper/CustomerMapper.kt");

    assert!(mapper.starts_with("package com.acme.mapper\n"));
    assert!(mapper.contains("import com.acme.model.Customer\n"));
    assert!(mapper.contains("import org.mybatis.dynamic.sql.SqlTable\n"));
    assert!(mapper.contains("import org.mybatis.dynamic.sql.util.kotlin.elements.isEqualTo\n"));
    assert!(mapper.contains("import org.mybatis.dynamic.sql.util.kotlin.mybatis3.update\n"));

    assert!(mapper.contains("object CustomerSupport {"));
    assert!(mapper.contains("    val customer = SqlTable.of(\"customer\")"));
    assert!(mapper.contains("    val custId = customer.column<Long>(\"cust_id\")"));

    assert!(mapper.contains(
        "fun CustomerMapper.updateByPrimaryKey(record: Customer) =\n    update {\n        \
         set(custName).equalTo(record::custName)\n        \
         where { custId isEqualTo record.custId!! }\n    }"
    ));
    assert!(mapper.contains("fun CustomerMapper.selectByPrimaryKey(custId_: Long) ="));
    assert!(mapper.contains("fun CustomerMapper.countAll() ="));

    assert!(mapper.contains(" * Update a row in customer by primary key."));
    assert!(
        mapper.contains(" * @param record the row with updated values; the key fields select the target row")
    );
}

#[test]
fn test_operations_follow_table_toggles() {
    let manifest = format!(
        "{CUSTOMER_MANIFEST}\n[tables.customer.generate]\ninsert_selective = false\nselect_all = false\n"
    );
    let files = generate(&manifest);
    let mapper = content(&files, "mapper/CustomerMapper.kt");

    assert!(!mapper.contains("insertSelective"));
    assert!(!mapper.contains("selectAll"));
    assert!(mapper.contains("fun CustomerMapper.insert(record: Customer) ="));
}

#[test]
fn test_suppress_all_comments_keeps_bare_marker() {
    let manifest = CUSTOMER_MANIFEST.replace(
        "add_remark_comments = true",
        "add_remark_comments = true\n    suppress_all_comments = true",
    );
    let files = generate(&manifest);
    let data_class = content(&files, "model/Customer.kt");

    assert!(!data_class.contains("/**"));
    assert!(data_class.contains("@Generated(\"batis-codegen\")"));
    assert!(!data_class.contains("comments="));
}

#[test]
fn test_suppress_date_makes_output_reproducible() {
    let manifest = Manifest::from_str(CUSTOMER_MANIFEST).unwrap();
    let mut options = manifest.comments.clone();
    options.suppress_date = true;
    let config = CommentConfig::from_options(&options).unwrap();
    let plugins = KotlinPluginChain::new();

    let early = DefaultCommentGenerator::at(
        config.clone(),
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
    );
    let late = DefaultCommentGenerator::at(
        config,
        Utc.with_ymd_and_hms(2026, 8, 7, 23, 59, 59).unwrap(),
    );

    let first: Vec<String> = KotlinGenerator::new(&manifest, &early, &plugins)
        .generate()
        .unwrap()
        .iter()
        .map(|f| f.content().to_string())
        .collect();
    let second: Vec<String> = KotlinGenerator::new(&manifest, &late, &plugins)
        .generate()
        .unwrap()
        .iter()
        .map(|f| f.content().to_string())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_generation_is_idempotent() {
    let manifest = Manifest::from_str(CUSTOMER_MANIFEST).unwrap();
    let config = CommentConfig::from_options(&manifest.comments).unwrap();
    let instant = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let hook = DefaultCommentGenerator::at(config, instant);
    let plugins = KotlinPluginChain::new();
    let generator = KotlinGenerator::new(&manifest, &hook, &plugins);

    assert_eq!(generator.generate().unwrap(), generator.generate().unwrap());
}
