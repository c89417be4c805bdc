//! Serialization of the extracted model.
#![cfg(feature = "serde")]

use create_table_analyzer::{Table, extract_tables};
use serde_json::json;

#[test]
fn test_table_serializes_with_camel_case_fields() {
    let sql = "CREATE TABLE `app`.`users` (\
               `id` INT UNSIGNED NOT NULL AUTO_INCREMENT COMMENT 'key'\
               ) ENGINE=InnoDB COMMENT='accounts';";
    let tables = extract_tables(sql);

    let value = serde_json::to_value(&tables).unwrap();
    assert_eq!(
        value,
        json!([{
            "name": "app.users",
            "comment": "accounts",
            "engine": "INNODB",
            "character": "",
            "collate": "",
            "columns": [{
                "name": "id",
                "dataType": "INT UNSIGNED",
                "defaultValue": "",
                "comment": "key",
                "notNull": true,
                "autoIncrement": true,
                "character": "",
                "collate": ""
            }]
        }])
    );
}

#[test]
fn test_table_deserializes_back() {
    let sql = "CREATE TABLE `t` (`a` DECIMAL(10,2) DEFAULT NULL, `b` TEXT CHARSET latin1);";
    let tables = extract_tables(sql);

    let text = serde_json::to_string(&tables).unwrap();
    let decoded: Vec<Table> = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, tables);
}
