use crate::{NebulaGqlWriter, Placeholders, count_placeholders};
use graphrel_core::{
    Error, GqlWriter, ParameterMetadata, Prepared, Result, UsageError, Value, truncate_long,
};
use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
};

/// Query text with `?` placeholders, rendered into a literal query on the client.
#[derive(Debug, Clone)]
pub struct NebulaPrepared {
    pub(crate) query: String,
    pub(crate) count: usize,
    pub(crate) bindings: BTreeMap<u64, Value>,
    pub(crate) index: u64,
}

impl NebulaPrepared {
    pub fn new(query: String) -> Self {
        let count = count_placeholders(&query);
        Self {
            query,
            count,
            bindings: BTreeMap::new(),
            index: 1,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl Prepared for NebulaPrepared {
    fn clear_bindings(&mut self) -> Result<&mut Self> {
        self.bindings.clear();
        self.index = 1;
        Ok(self)
    }

    fn bind(&mut self, value: impl Into<Value>) -> Result<&mut Self> {
        self.bind_index(value, self.index)
    }

    fn bind_index(&mut self, value: impl Into<Value>, index: u64) -> Result<&mut Self> {
        if index == 0 || index > self.count as u64 {
            let error = Error::new(UsageError::PlaceholderCountMismatch {
                index,
                count: self.count as u64,
            })
            .context(format!(
                "While binding a parameter of the query:\n{}",
                truncate_long!(self.query)
            ));
            log::error!("{:#}", error);
            return Err(error);
        }
        self.bindings.insert(index, value.into());
        self.index = index + 1;
        Ok(self)
    }

    fn parameter_count(&self) -> usize {
        self.count
    }

    fn render(&self) -> Result<String> {
        let writer = NebulaGqlWriter::new();
        let mut out = String::with_capacity(self.query.len() + self.count * 8);
        let mut position = 0;
        for (i, offset) in Placeholders::new(&self.query).enumerate() {
            let index = i as u64 + 1;
            let Some(value) = self.bindings.get(&index) else {
                let error = Error::new(UsageError::UnboundParameter { index }).context(format!(
                    "While rendering the query:\n{}",
                    truncate_long!(self.query)
                ));
                log::error!("{:#}", error);
                return Err(error);
            };
            out.push_str(&self.query[position..offset]);
            writer.write_value(&mut out, value);
            position = offset + 1;
        }
        out.push_str(&self.query[position..]);
        Ok(out)
    }

    fn metadata(&self) -> ParameterMetadata {
        ParameterMetadata {
            count: self.count,
            kinds: (1..=self.count as u64)
                .map(|i| self.bindings.get(&i).map(Value::kind_name))
                .collect(),
        }
    }
}

impl Display for NebulaPrepared {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", truncate_long!(self.query))
    }
}
