// src/value.rs
use crate::error::{ErrorKind, ErrorObject, Exception, throw};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

// Script values
#[derive(Clone)]
pub enum Value {
    Number(f64),
    String(String),
    Boolean(bool),
    Undefined,
    Null,
    NativeFunction(Rc<NativeFunction>),
    Object(Rc<Object>),
    Error(ErrorObject),
}

// Native function type
pub type NativeFunction = dyn Fn(Vec<Value>) -> Result<Value, Exception>;

/// A plain object: a bag of named properties, some of which may be callable.
#[derive(Default)]
pub struct Object {
    properties: HashMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Object {
            properties: HashMap::new(),
        }
    }

    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.properties.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Error(e) => write!(f, "[{}]", e),
            other => write!(f, "{}", other),
        }
    }
}

// String(value) rendering, used by concatenation and console output
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::NativeFunction(_) => f.write_str("[Function]"),
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Error(e) => write!(f, "{}", e),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<ErrorObject> for Value {
    fn from(e: ErrorObject) -> Self {
        Value::Error(e)
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if n == 0.0 {
        // covers negative zero
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // exponent form always carries a sign: 1e+21, 1e-7
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        format!("{}", n)
    }
}

impl Value {
    pub fn native(function: impl Fn(Vec<Value>) -> Result<Value, Exception> + 'static) -> Self {
        Value::NativeFunction(Rc::new(function))
    }

    pub fn object<'a>(properties: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        let mut object = Object::new();
        for (name, value) in properties {
            object.define(name, value);
        }
        Value::Object(Rc::new(object))
    }

    /// A data record whose `x` and `y` accessors return the given numbers.
    pub fn record(x: f64, y: f64) -> Self {
        Value::object([
            ("x", Value::native(move |_| Ok(Value::Number(x)))),
            ("y", Value::native(move |_| Ok(Value::Number(y)))),
        ])
    }

    pub fn get_property(&self, name: &str) -> Value {
        match self {
            Value::Object(object) => object.get(name).cloned().unwrap_or(Value::Undefined),
            _ => Value::Undefined,
        }
    }

    /// `receiver.method(arguments)`, where `receiver` is the name the caller
    /// knows this value by.
    pub fn call_method(
        &self,
        receiver: &str,
        method: &str,
        arguments: Vec<Value>,
    ) -> Result<Value, Exception> {
        match self.get_property(method) {
            Value::NativeFunction(function) => function(arguments),
            _ => {
                log::trace!("{:?} has no callable `{}`", self, method);
                throw(ErrorObject::new(
                    ErrorKind::TypeError,
                    format!("{}.{} is not a function", receiver, method),
                ))
            }
        }
    }

    pub fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Boolean(true) => 1.0,
            Value::Boolean(false) => 0.0,
            Value::Null => 0.0,
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            _ => f64::NAN,
        }
    }

    // Objects and errors become their string form before `+`
    fn is_stringish(&self) -> bool {
        matches!(
            self,
            Value::String(_) | Value::Object(_) | Value::NativeFunction(_) | Value::Error(_)
        )
    }

    /// The `+` operator.
    pub fn add(&self, other: &Value) -> Value {
        if self.is_stringish() || other.is_stringish() {
            Value::String(format!("{}{}", self, other))
        } else {
            Value::Number(self.to_number() + other.to_number())
        }
    }

    /// The `/` operator. Division by zero yields an infinity or NaN, never a raise.
    pub fn divide(&self, other: &Value) -> Value {
        Value::Number(self.to_number() / other.to_number())
    }

    /// The `===` operator.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Undefined, Value::Undefined) => true,
            (Value::NativeFunction(a), Value::NativeFunction(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => false,
        }
    }
}
