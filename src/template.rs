use anyhow::{bail, ensure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Directory name under the template root
    pub key: String,
    pub display: String,
    pub description: String,
}

impl Template {
    pub fn new(key: &str, display: &str, description: &str) -> Self {
        Template {
            key: key.to_owned(),
            display: display.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// Ordered, immutable list of the templates a run can choose from.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if `templates` is empty or two entries share a key.
    pub fn new(templates: Vec<Template>) -> anyhow::Result<Self> {
        ensure!(!templates.is_empty(), "Template catalog is empty");

        for (i, template) in templates.iter().enumerate() {
            if templates[..i].iter().any(|t| t.key == template.key) {
                bail!("Duplicate template key `{}` in catalog", template.key);
            }
        }

        Ok(Catalog { templates })
    }

    /// The templates shipped with the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Catalog {
            templates: vec![
                Template::new(
                    "basic",
                    "Basic",
                    "Basic 11ty setup with minimal configuration",
                ),
                Template::new("blog", "Blog", "Blog setup with posts and tags support"),
            ],
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.key == key)
    }

    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.key.as_str())
    }
}
