use std::panic::{self, AssertUnwindSafe};

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::CheckError;
use crate::mode::RuntimeMode;
use crate::spec::{SECRET, SpecError, TypeSpec, TypeSpecs, Verdict};


/// Display name used in messages when no component name is given.
const FALLBACK_NAME: &str = "React class";

/// Check `values` against `type_specs`, returning the first failure as a
/// formatted message, or `None` when every spec passes.
///
/// `location` tags the role of the values in messages (e.g. "prop",
/// "context"). `component_name` identifies the consumer; `get_stack`, when
/// supplied, contributes a suffix appended to reported validation errors.
///
/// The runtime mode is read from the environment once per call; in
/// production mode this is a no-op that always returns `None`.
pub fn check_prop_types(
    type_specs: &TypeSpecs,
    values: &Map<String, Value>,
    location: &str,
    component_name: Option<&str>,
    get_stack: Option<&dyn Fn() -> String>,
) -> Option<String> {
    check_prop_types_with_mode(
        RuntimeMode::from_env(),
        type_specs,
        values,
        location,
        component_name,
        get_stack,
    )
}

/// Same as [`check_prop_types`] with the runtime mode supplied explicitly.
pub fn check_prop_types_with_mode(
    mode: RuntimeMode,
    type_specs: &TypeSpecs,
    values: &Map<String, Value>,
    location: &str,
    component_name: Option<&str>,
    get_stack: Option<&dyn Fn() -> String>,
) -> Option<String> {
    if mode.is_production() {
        return None;
    }

    trace!(location, component = ?component_name, "checking prop types");
    let message = run_specs(type_specs, values, location, component_name, get_stack);
    if let Some(message) = &message {
        debug!(location, component = ?component_name, %message, "prop type check failed");
    }
    message
}

/// Same as [`check_prop_types`], but fails loudly: a reported message becomes
/// an `Err` whose display text is exactly that message. Likewise a no-op in
/// production mode.
pub fn assert_prop_types(
    type_specs: &TypeSpecs,
    values: &Map<String, Value>,
    location: &str,
    component_name: Option<&str>,
    get_stack: Option<&dyn Fn() -> String>,
) -> Result<(), CheckError> {
    assert_prop_types_with_mode(
        RuntimeMode::from_env(),
        type_specs,
        values,
        location,
        component_name,
        get_stack,
    )
}

/// Same as [`assert_prop_types`] with the runtime mode supplied explicitly.
pub fn assert_prop_types_with_mode(
    mode: RuntimeMode,
    type_specs: &TypeSpecs,
    values: &Map<String, Value>,
    location: &str,
    component_name: Option<&str>,
    get_stack: Option<&dyn Fn() -> String>,
) -> Result<(), CheckError> {
    match check_prop_types_with_mode(mode, type_specs, values, location, component_name, get_stack)
    {
        Some(message) => Err(CheckError::new(message)),
        None => Ok(()),
    }
}

fn run_specs(
    type_specs: &TypeSpecs,
    values: &Map<String, Value>,
    location: &str,
    component_name: Option<&str>,
    get_stack: Option<&dyn Fn() -> String>,
) -> Option<String> {
    let name = match component_name {
        Some(name) if !name.is_empty() => name,
        _ => FALLBACK_NAME,
    };

    for (spec_name, spec) in type_specs.iter() {
        let validator = match spec {
            TypeSpec::Validator(validator) => validator,
            TypeSpec::NotCallable => {
                return Some(format!(
                    "{name}: {location} type `{spec_name}` is invalid; it must be a function, \
                     usually from React.PropTypes."
                ));
            }
        };

        // Validators may panic; contain it and report it like a returned
        // error-kind result. Validators receive the raw component name, not
        // the display fallback.
        let verdict = panic::catch_unwind(AssertUnwindSafe(|| {
            validator(values, spec_name, component_name, location, None, SECRET)
        }))
        .unwrap_or_else(|payload| Verdict::Fail(SpecError::new(panic_text(payload))));

        match verdict {
            Verdict::Pass => {}
            Verdict::Malformed(value) if is_falsy(&value) => {}
            Verdict::Malformed(value) => {
                return Some(format!(
                    "{name}: type specification of {location} `{spec_name}` is invalid; the type \
                     checker function must return `null` or an `Error` but returned a {}. You may \
                     have forgotten to pass an argument to the type checker creator (arrayOf, \
                     instanceOf, objectOf, oneOf, oneOfType, and shape all require an argument).",
                    type_name(&value)
                ));
            }
            Verdict::Fail(error) => {
                let stack = get_stack.map(|get_stack| get_stack()).unwrap_or_default();
                return Some(format!("Failed {location} type: {}{stack}", error.message()));
            }
        }
    }

    None
}

fn panic_text(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "validator panicked".to_string()
    }
}

/// Truthiness of a dynamic value under the validator return protocol: falsy
/// malformed returns count as a pass.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Runtime type name of a malformed validator return, as it appears in the
/// configuration error message.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
    }
}
