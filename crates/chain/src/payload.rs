//! Entry function payloads in the node's JSON encoding

use serde::{Deserialize, Serialize, Serializer};

/// `address::module` pair every function id and struct tag is built from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleId {
    pub address: String,
    pub name: String,
}

impl ModuleId {
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
        }
    }

    /// `0x..::healthcare::add_patient`
    pub fn function(&self, function: &str) -> String {
        format!("{}::{}::{}", self.address, self.name, function)
    }

    /// `0x..::healthcare::ProviderRegistry`
    pub fn struct_tag(&self, name: &str) -> String {
        format!("{}::{}::{}", self.address, self.name, name)
    }
}

impl Default for ModuleId {
    fn default() -> Self {
        ModuleId::new(crate::DEFAULT_MODULE_ADDRESS, crate::DEFAULT_MODULE_NAME)
    }
}

/// A positional argument to an entry function
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveValue {
    String(String),
    /// Rendered as a decimal string, as the node expects for `u64`
    U64(u64),
}

impl MoveValue {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            MoveValue::String(s) => serde_json::Value::String(s.clone()),
            MoveValue::U64(n) => serde_json::Value::String(n.to_string()),
        }
    }
}

impl From<&str> for MoveValue {
    fn from(value: &str) -> Self {
        MoveValue::String(value.to_string())
    }
}

impl From<String> for MoveValue {
    fn from(value: String) -> Self {
        MoveValue::String(value)
    }
}

impl From<u64> for MoveValue {
    fn from(value: u64) -> Self {
        MoveValue::U64(value)
    }
}

impl Serialize for MoveValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MoveValue::String(s) => serializer.serialize_str(s),
            MoveValue::U64(n) => serializer.serialize_str(&n.to_string()),
        }
    }
}

/// Call of a public entry function with no type arguments
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "entry_function_payload")]
pub struct EntryFunctionPayload {
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<MoveValue>,
}

impl EntryFunctionPayload {
    pub fn new(function: String, arguments: Vec<MoveValue>) -> Self {
        Self {
            function,
            type_arguments: Vec::new(),
            arguments,
        }
    }

    /// Name after the last `::`
    pub fn function_name(&self) -> &str {
        self.function.rsplit("::").next().unwrap_or(&self.function)
    }

    /// Arguments as they go over the wire
    pub fn arguments_json(&self) -> Vec<serde_json::Value> {
        self.arguments.iter().map(MoveValue::to_json).collect()
    }
}
