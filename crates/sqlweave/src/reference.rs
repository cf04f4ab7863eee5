//! Table and column references.

/// An entity-qualified field, e.g. `users.id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityField {
    pub entity: String,
    pub field: String,
}

impl EntityField {
    pub fn new(entity: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            field: field.into(),
        }
    }
}

/// A table or column reference: a bare name or an entity-qualified field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    Name(String),
    EntityField(EntityField),
}

impl Reference {
    /// The qualifying entity, if any.
    pub fn entity(&self) -> Option<&str> {
        match self {
            Reference::Name(_) => None,
            Reference::EntityField(ef) => Some(&ef.entity),
        }
    }

    /// The unqualified name (the field of an entity-qualified reference).
    pub fn field(&self) -> &str {
        match self {
            Reference::Name(name) => name,
            Reference::EntityField(ef) => &ef.field,
        }
    }
}

impl From<&str> for Reference {
    fn from(name: &str) -> Self {
        Reference::Name(name.to_string())
    }
}

impl From<String> for Reference {
    fn from(name: String) -> Self {
        Reference::Name(name)
    }
}

impl From<EntityField> for Reference {
    fn from(ef: EntityField) -> Self {
        Reference::EntityField(ef)
    }
}

/// A table in a FROM or JOIN clause, with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub table: String,
    pub alias: Option<String>,
}

impl TableRef {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            alias: None,
        }
    }

    /// Set the alias the table is known by in the statement.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl From<&str> for TableRef {
    fn from(table: &str) -> Self {
        TableRef::new(table)
    }
}

impl From<String> for TableRef {
    fn from(table: String) -> Self {
        TableRef::new(table)
    }
}

/// One ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub entity: Option<String>,
    pub field: String,
    pub ascending: bool,
}

impl Order {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            entity: None,
            field: field.into(),
            ascending: true,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            entity: None,
            field: field.into(),
            ascending: false,
        }
    }

    /// Qualify the ordered field with an entity.
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub(crate) fn direction(&self) -> &'static str {
        if self.ascending { "ASC" } else { "DESC" }
    }
}
