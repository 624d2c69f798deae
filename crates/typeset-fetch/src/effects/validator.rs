use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;
use tracing::warn;

use crate::error::{FetchError, Result};

/// Structural check of a raw document against a schema.
///
/// Failure is reported only as `false`; implementations must not panic on
/// malformed documents or schemas.
pub trait Validator {
    /// Schema representation this validator understands.
    type Schema: ?Sized;

    fn validate(&self, document: &str, schema: &Self::Schema) -> bool;
}

impl<V: Validator + ?Sized> Validator for &V {
    type Schema = V::Schema;

    fn validate(&self, document: &str, schema: &Self::Schema) -> bool {
        (**self).validate(document, schema)
    }
}

/// Adapter that lets a plain function or closure act as a [`Validator`].
///
/// Built by [`validator_fn`].
pub struct FnValidator<F, S: ?Sized> {
    check:  F,
    schema: PhantomData<fn(&S) -> bool>,
}

/// Wrap `check` so it can be handed to
/// [`ResourceLoader::with_validator`](crate::ResourceLoader::with_validator).
///
/// # Examples
///
/// ```
/// use typeset_fetch::effects::{Validator, validator_fn};
///
/// let non_empty = validator_fn(|document: &str, _schema: &str| !document.is_empty());
/// assert!(non_empty.validate("{}", "any"));
/// assert!(!non_empty.validate("", "any"));
/// ```
pub fn validator_fn<S, F>(check: F) -> FnValidator<F, S>
where
    S: ?Sized,
    F: Fn(&str, &S) -> bool,
{
    FnValidator {
        check,
        schema: PhantomData,
    }
}

impl<F, S> Validator for FnValidator<F, S>
where
    S: ?Sized,
    F: Fn(&str, &S) -> bool,
{
    type Schema = S;

    fn validate(&self, document: &str, schema: &S) -> bool { (self.check)(document, schema) }
}

impl<F: Clone, S: ?Sized> Clone for FnValidator<F, S> {
    fn clone(&self) -> Self {
        Self {
            check:  self.check.clone(),
            schema: PhantomData,
        }
    }
}

impl<F, S: ?Sized> fmt::Debug for FnValidator<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").field("check", &"{ ... }").finish()
    }
}

/// JSON Schema validation backed by the `jsonschema` crate.
///
/// The document is parsed before checking; text that is not JSON never
/// validates. A schema that fails to compile rejects every document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaValidator;

impl Validator for JsonSchemaValidator {
    type Schema = Value;

    fn validate(&self, document: &str, schema: &Value) -> bool {
        let Ok(instance) = serde_json::from_str::<Value>(document) else {
            return false;
        };
        match jsonschema::validator_for(schema) {
            Ok(compiled) => compiled.is_valid(&instance),
            Err(e) => {
                warn!(error = %e, "schema does not compile");
                false
            }
        }
    }
}

/// JSON Schema validation against a schema compiled once up front.
///
/// Pass the result of [`compile`](Self::compile) as the schema of every
/// call; only the document is parsed per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompiledSchemaValidator;

impl CompiledSchemaValidator {
    pub fn compile(schema: &Value) -> Result<jsonschema::Validator> {
        jsonschema::validator_for(schema).map_err(|e| FetchError::Schema(e.to_string()))
    }
}

impl Validator for CompiledSchemaValidator {
    type Schema = jsonschema::Validator;

    fn validate(&self, document: &str, schema: &jsonschema::Validator) -> bool {
        serde_json::from_str::<Value>(document).is_ok_and(|instance| schema.is_valid(&instance))
    }
}
