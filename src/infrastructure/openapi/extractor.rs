//! Walks a loaded OpenAPI document into the scaffold model
//!
//! Local `$ref`s into `#/components` are followed. Anything that cannot be
//! resolved to a typed schema aborts extraction; no type is ever guessed.

use openapiv3::{
    Components, OpenAPI, Operation, Parameter, ParameterSchemaOrContent, PathItem, ReferenceOr,
    Schema, SchemaKind, Type,
};
use tracing::debug;

use super::types::{OperationSpec, ParamSpec, PathSpec};
use crate::core::error::{Error, Result};
use crate::core::utils::dir_name;

/// The only request body media type that is extracted
pub const JSON_MEDIA_TYPE: &str = "application/json";

const SCHEMA_PREFIX: &str = "#/components/schemas/";
const PARAMETER_PREFIX: &str = "#/components/parameters/";
const REQUEST_BODY_PREFIX: &str = "#/components/requestBodies/";

/// Longest `$ref` chain followed before giving up
const MAX_REF_DEPTH: usize = 32;

/// Extracts [`PathSpec`]s from an OpenAPI document
pub struct SpecExtractor<'a> {
    document: &'a OpenAPI,
}

impl<'a> SpecExtractor<'a> {
    pub fn new(document: &'a OpenAPI) -> Self {
        Self { document }
    }

    /// Extract every path in declaration order.
    ///
    /// Operations within a path follow the fixed order get, put, post, delete,
    /// options, head, patch, trace.
    pub fn extract(&self) -> Result<Vec<PathSpec>> {
        let document = self.document;
        let mut specs = Vec::with_capacity(document.paths.paths.len());

        for (path, item) in &document.paths.paths {
            let item = match item {
                ReferenceOr::Item(item) => item,
                ReferenceOr::Reference { reference } => {
                    return Err(Error::schema(
                        path.as_str(),
                        format!("path item references are not supported: {reference}"),
                    ));
                }
            };

            let methods = item
                .iter()
                .map(|(method, operation)| self.extract_operation(path, method, item, operation))
                .collect::<Result<Vec<_>>>()?;

            specs.push(PathSpec {
                dir_name: dir_name(path, "/"),
                path: path.clone(),
                methods,
            });
        }

        debug!("Extracted {} paths", specs.len());
        Ok(specs)
    }

    fn extract_operation(
        &self,
        path: &str,
        method: &str,
        item: &'a PathItem,
        operation: &'a Operation,
    ) -> Result<OperationSpec> {
        let method = method.to_ascii_lowercase();
        let location = format!("{method} {path}");

        let params = self.extract_params(&location, item, operation)?;
        let body = self.extract_body(&location, operation)?;

        debug!(
            operation = %location,
            params = params.len(),
            body = body.len(),
            "Extracted operation"
        );

        Ok(OperationSpec {
            method,
            params,
            body,
        })
    }

    /// Path-level parameters first, replaced in place by operation parameters
    /// with the same name and location.
    fn extract_params(
        &self,
        location: &str,
        item: &'a PathItem,
        operation: &'a Operation,
    ) -> Result<Vec<ParamSpec>> {
        let mut merged: Vec<&'a Parameter> = Vec::new();

        for parameter in item.parameters.iter().chain(&operation.parameters) {
            let parameter = self.resolve(
                parameter,
                PARAMETER_PREFIX,
                |c, name| c.parameters.get(name),
                location,
            )?;

            match merged.iter_mut().find(|seen| same_parameter(seen, parameter)) {
                Some(slot) => *slot = parameter,
                None => merged.push(parameter),
            }
        }

        merged
            .into_iter()
            .map(|parameter| self.param_spec(location, parameter))
            .collect()
    }

    fn param_spec(&self, location: &str, parameter: &'a Parameter) -> Result<ParamSpec> {
        let data = parameter.parameter_data_ref();
        let location = format!("{location} parameter `{}`", data.name);

        let schema = match &data.format {
            ParameterSchemaOrContent::Schema(schema) => schema,
            ParameterSchemaOrContent::Content(content) => content
                .get(JSON_MEDIA_TYPE)
                .and_then(|media| media.schema.as_ref())
                .ok_or_else(|| Error::schema(&location, "parameter declares no schema"))?,
        };
        let schema = self.resolve(schema, SCHEMA_PREFIX, |c, name| c.schemas.get(name), &location)?;

        Ok(ParamSpec {
            name: data.name.clone(),
            schema_type: schema_type(schema, &location)?,
            example: data
                .example
                .clone()
                .or_else(|| schema.schema_data.example.clone()),
        })
    }

    /// Top-level properties of the `application/json` request body.
    /// Nested objects and array items are not descended into.
    fn extract_body(&self, location: &str, operation: &'a Operation) -> Result<Vec<ParamSpec>> {
        let Some(body) = &operation.request_body else {
            return Ok(Vec::new());
        };
        let body = self.resolve(
            body,
            REQUEST_BODY_PREFIX,
            |c, name| c.request_bodies.get(name),
            location,
        )?;

        let Some(media) = body.content.get(JSON_MEDIA_TYPE) else {
            debug!(operation = %location, "Request body has no application/json content, skipping");
            return Ok(Vec::new());
        };

        let location = format!("{location} request body");
        let schema = media
            .schema
            .as_ref()
            .ok_or_else(|| Error::schema(&location, "media type declares no schema"))?;
        let schema = self.resolve(schema, SCHEMA_PREFIX, |c, name| c.schemas.get(name), &location)?;

        let properties = match &schema.schema_kind {
            SchemaKind::Type(Type::Object(object)) => &object.properties,
            SchemaKind::Any(any) => &any.properties,
            _ => return Ok(Vec::new()),
        };

        properties
            .iter()
            .map(|(name, property)| {
                let location = format!("{location} property `{name}`");
                let schema = match property {
                    ReferenceOr::Item(schema) => &**schema,
                    ReferenceOr::Reference { reference } => self.follow(
                        reference,
                        SCHEMA_PREFIX,
                        |c, name| c.schemas.get(name),
                        &location,
                    )?,
                };

                Ok(ParamSpec {
                    name: name.clone(),
                    schema_type: schema_type(schema, &location)?,
                    example: schema.schema_data.example.clone(),
                })
            })
            .collect()
    }

    fn resolve<T>(
        &self,
        item: &'a ReferenceOr<T>,
        prefix: &str,
        lookup: impl Fn(&'a Components, &str) -> Option<&'a ReferenceOr<T>>,
        location: &str,
    ) -> Result<&'a T> {
        match item {
            ReferenceOr::Item(value) => Ok(value),
            ReferenceOr::Reference { reference } => self.follow(reference, prefix, lookup, location),
        }
    }

    /// Follow a `$ref` chain through `#/components`
    fn follow<T>(
        &self,
        reference: &'a str,
        prefix: &str,
        lookup: impl Fn(&'a Components, &str) -> Option<&'a ReferenceOr<T>>,
        location: &str,
    ) -> Result<&'a T> {
        let mut reference = reference;

        for _ in 0..MAX_REF_DEPTH {
            let name = reference.strip_prefix(prefix).ok_or_else(|| {
                Error::schema(location, format!("unsupported reference {reference}"))
            })?;

            let target = self
                .document
                .components
                .as_ref()
                .and_then(|components| lookup(components, name))
                .ok_or_else(|| Error::schema(location, format!("unresolved reference {reference}")))?;

            match target {
                ReferenceOr::Item(value) => return Ok(value),
                ReferenceOr::Reference { reference: next } => reference = next.as_str(),
            }
        }

        Err(Error::schema(
            location,
            format!("reference chain longer than {MAX_REF_DEPTH} starting at {reference}"),
        ))
    }
}

fn same_parameter(a: &Parameter, b: &Parameter) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
        && a.parameter_data_ref().name == b.parameter_data_ref().name
}

/// The schema's declared `type` keyword
fn schema_type(schema: &Schema, location: &str) -> Result<String> {
    let name = match &schema.schema_kind {
        SchemaKind::Type(Type::String(_)) => "string",
        SchemaKind::Type(Type::Number(_)) => "number",
        SchemaKind::Type(Type::Integer(_)) => "integer",
        SchemaKind::Type(Type::Boolean(_)) => "boolean",
        SchemaKind::Type(Type::Object(_)) => "object",
        SchemaKind::Type(Type::Array(_)) => "array",
        SchemaKind::Any(any) => {
            return any
                .typ
                .clone()
                .ok_or_else(|| Error::schema(location, "schema declares no type"));
        }
        _ => return Err(Error::schema(location, "schema declares no type")),
    };
    Ok(name.to_string())
}
