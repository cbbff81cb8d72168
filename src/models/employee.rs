use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: String,           // ⇔ employees.id (externally assigned)
    pub name: Option<String>, // ⇔ employees.name (nullable)
}

impl Employee {
    pub fn new(id: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.filter(|n| !n.trim().is_empty()),
        }
    }

    /// Label used in report headers: "Name (ID)" or just the ID.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", name, self.id),
            None => self.id.clone(),
        }
    }
}
