use crate::store::{StoreError, UserStore};
use crate::types::{UserPatch, UserRecord};
use async_trait::async_trait;
use aws_sdk_dynamodb::{types::AttributeValue, Client as DynamoClient};
use std::collections::HashMap;

/// DynamoDB adapter for [`UserStore`]: one table, partition key `email`.
///
/// Client and table name are injected once at startup; the adapter holds no
/// other state.
pub struct DynamoUserStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoUserStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

/// A rendered DynamoDB update: `SET` expression plus attribute name/value
/// placeholders. Attribute names are always `#`-escaped since `name` is a
/// DynamoDB reserved word.
struct UpdateExpression {
    expression: String,
    names: HashMap<String, String>,
    values: HashMap<String, AttributeValue>,
}

fn build_update_expression(patch: &UserPatch) -> Option<UpdateExpression> {
    let mut update_expr = vec![];
    let mut expr_names = HashMap::new();
    let mut expr_values = HashMap::new();

    let mut set_field = |field: &str, value: AttributeValue| {
        update_expr.push(format!("#{field} = :{field}"));
        expr_names.insert(format!("#{field}"), field.to_string());
        expr_values.insert(format!(":{field}"), value);
    };

    if let Some(name) = &patch.name {
        set_field("name", AttributeValue::S(name.clone()));
    }
    if let Some(dob) = &patch.dob {
        set_field("dob", AttributeValue::S(dob.clone()));
    }
    if let Some(gender) = &patch.gender {
        set_field("gender", AttributeValue::S(gender.clone()));
    }
    if let Some(weight) = patch.weight {
        set_field("weight", AttributeValue::N(weight.to_string()));
    }
    if let Some(height) = patch.height {
        set_field("height", AttributeValue::N(height.to_string()));
    }

    if update_expr.is_empty() {
        return None;
    }

    Some(UpdateExpression {
        expression: format!("SET {}", update_expr.join(", ")),
        names: expr_names,
        values: expr_values,
    })
}

fn record_from_item(item: &HashMap<String, AttributeValue>) -> UserRecord {
    let string_attr = |key: &str| {
        item.get(key)
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default()
    };
    let number_attr = |key: &str| {
        item.get(key)
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse().ok())
            .unwrap_or_default()
    };

    UserRecord {
        email: string_attr("email"),
        name: string_attr("name"),
        dob: string_attr("dob"),
        gender: string_attr("gender"),
        weight: number_attr("weight"),
        height: number_attr("height"),
    }
}

#[async_trait]
impl UserStore for DynamoUserStore {
    async fn get(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("email", AttributeValue::S(email.to_string()))
            .send()
            .await
            .map_err(StoreError::request)?;

        Ok(result.item().map(record_from_item))
    }

    async fn put(&self, record: &UserRecord) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("email", AttributeValue::S(record.email.clone()))
            .item("name", AttributeValue::S(record.name.clone()))
            .item("dob", AttributeValue::S(record.dob.clone()))
            .item("gender", AttributeValue::S(record.gender.clone()))
            .item("weight", AttributeValue::N(record.weight.to_string()))
            .item("height", AttributeValue::N(record.height.to_string()))
            .send()
            .await
            .map_err(StoreError::request)?;

        Ok(())
    }

    /// DynamoDB `update_item` upserts: patching an email with no record
    /// creates a sparse item holding only the key and the patched fields.
    /// That native behavior is kept here; callers that need strict existence
    /// semantics must read first.
    async fn update_partial(&self, email: &str, patch: &UserPatch) -> Result<(), StoreError> {
        let Some(update) = build_update_expression(patch) else {
            return Ok(());
        };

        let mut builder = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("email", AttributeValue::S(email.to_string()))
            .update_expression(update.expression);

        for (k, v) in update.names {
            builder = builder.expression_attribute_names(k, v);
        }
        for (k, v) in update.values {
            builder = builder.expression_attribute_values(k, v);
        }

        builder.send().await.map_err(StoreError::request)?;

        Ok(())
    }

    async fn delete(&self, email: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("email", AttributeValue::S(email.to_string()))
            .send()
            .await
            .map_err(StoreError::request)?;

        Ok(())
    }
}
