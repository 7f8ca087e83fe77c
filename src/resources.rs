use anyhow::{bail, Context, Result};

/// Format the greeting for `name`. Any string is interpolated verbatim.
pub fn get_greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

type ResourceHandler = Box<dyn Fn(&str) -> Result<String> + Send + Sync>;

/// A URI template with exactly one `{param}` placeholder,
/// e.g. `greeting://{name}`.
struct ResourceTemplate {
    prefix: String,
    suffix: String,
}

impl ResourceTemplate {
    fn parse(template: &str) -> Result<Self> {
        let open = template
            .find('{')
            .with_context(|| format!("Template has no placeholder: {}", template))?;
        let close = template
            .find('}')
            .with_context(|| format!("Template has no placeholder: {}", template))?;
        if close < open {
            bail!("Malformed template: {}", template);
        }
        Ok(Self {
            prefix: template[..open].to_string(),
            suffix: template[close + 1..].to_string(),
        })
    }

    /// Extract the placeholder value when `uri` matches this template.
    fn extract<'a>(&self, uri: &'a str) -> Option<&'a str> {
        uri.strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())
    }
}

struct ResourceEntry {
    template_str: String,
    template: ResourceTemplate,
    description: String,
    handler: ResourceHandler,
}

/// Read-only, URI-addressed resources keyed by template.
pub struct ResourceRegistry {
    entries: Vec<ResourceEntry>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register<F>(&mut self, template: &str, description: &str, handler: F) -> Result<()>
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        let parsed = ResourceTemplate::parse(template)?;
        log::info!("ResourceRegistry: registered {}", template);
        self.entries.push(ResourceEntry {
            template_str: template.to_string(),
            template: parsed,
            description: description.to_string(),
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// Resolve `uri` against the registered templates and invoke the handler
    /// of the first match.
    pub fn read(&self, uri: &str) -> Result<String> {
        for entry in &self.entries {
            if let Some(param) = entry.template.extract(uri) {
                return (entry.handler)(param);
            }
        }
        bail!("No resource matches URI: {}", uri)
    }

    pub fn list(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|e| (e.template_str.clone(), e.description.clone()))
            .collect()
    }
}

/// Register the built-in resources.
pub fn register_defaults(registry: &mut ResourceRegistry) -> Result<()> {
    registry.register(
        "greeting://{name}",
        "Get a personalized greeting",
        |name| Ok(get_greeting(name)),
    )
}
