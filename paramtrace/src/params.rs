//! Named parameter bag

use tracing::debug;

use crate::compose::compose;
use crate::declare::clean_name;
use crate::error::{Error, Result};
use crate::options::FormatOptions;
use crate::table::TableValue;
use crate::traits::{ToParams, ToValue};
use crate::value::Value;

/// Read-only view of a set of named parameters.
///
/// The composer reads parameters exclusively through this trait, so any
/// parameter collection can be rendered without being copied or mutated.
pub trait ParameterSource {
    /// Parameter names without prefix, in output order.
    fn parameter_names(&self) -> Vec<&str>;

    /// Look up a parameter by name; a leading `@` is optional.
    fn get(&self, name: &str) -> Option<&Value>;
}

/// An ordered bag of named parameters.
///
/// Names are stored without their `@` prefix and are unique: adding a name
/// that is already present replaces its value in place.
///
/// # Example
///
/// ```ignore
/// use paramtrace::Parameters;
///
/// let mut params = Parameters::new();
/// params.add("@id", 42)?;
/// params.add("@name", "O'Hara")?;
///
/// assert_eq!(
///     params.to_script(None, &Default::default()),
///     "DECLARE @id INT = 42\nDECLARE @name NVARCHAR(MAX) = 'O''Hara'\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    entries: Vec<(String, Value)>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any existing one with the same name.
    pub fn add<T: ToValue>(&mut self, name: &str, value: T) -> Result<()> {
        self.add_value(name, value.to_value())
    }

    /// Add an already converted value.
    pub fn add_value(&mut self, name: &str, value: Value) -> Result<()> {
        let name = clean_name(name);
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name.to_string(), value)),
        }
        Ok(())
    }

    /// Add a table-valued parameter.
    pub fn add_table(&mut self, name: &str, table: TableValue) -> Result<()> {
        self.add_value(name, Value::Table(table))
    }

    /// Add every field of a [`ToParams`] struct as a parameter.
    pub fn add_params<P: ToParams>(&mut self, params: &P) -> Result<()> {
        for (name, value) in P::param_names().iter().zip(params.param_values()) {
            self.add_value(name, value)?;
        }
        Ok(())
    }

    /// Build a bag from a [`ToParams`] struct.
    pub fn from_params<P: ToParams>(params: &P) -> Result<Self> {
        let mut bag = Self::new();
        bag.add_params(params)?;
        Ok(bag)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the declarations of this bag, optionally followed by an `EXEC`
    /// of `procedure` bound to every parameter.
    pub fn to_script(&self, procedure: Option<&str>, options: &FormatOptions) -> String {
        compose(Some(self), procedure, options)
    }
}

/// Collects `(name, value)` pairs with the same replace-in-place semantics as
/// [`Parameters::add_value`]. Pairs with an empty name are skipped.
impl FromIterator<(String, Value)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (name, value) in iter {
            if clean_name(&name).is_empty() {
                debug!(name = name.as_str(), "skipping parameter without a name");
                continue;
            }
            // Non-empty names cannot fail.
            bag.add_value(&name, value).ok();
        }
        bag
    }
}

impl ParameterSource for Parameters {
    fn parameter_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    fn get(&self, name: &str) -> Option<&Value> {
        let name = clean_name(name);
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}
