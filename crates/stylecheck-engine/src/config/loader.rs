//! XML configuration loader.
//!
//! Reads the module tree from `<module name="...">` and
//! `<property name="..." value="..." [default="..."]/>` elements.
//! Attribute values are expanded through a [`PropertyResolver`] while reading.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use stylecheck_core::ConfigError;

use super::configuration::Configuration;
use super::expander::{expand, PropertyResolver};

const MODULE: &[u8] = b"module";
const PROPERTY: &[u8] = b"property";

/// Load a configuration from an XML string.
///
/// With `omit_ignored_modules` set, modules whose `severity` is `ignore` are
/// dropped from the tree together with their children.
pub fn load_configuration(
    xml: &str,
    resolver: &dyn PropertyResolver,
    omit_ignored_modules: bool,
) -> Result<Configuration, ConfigError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Configuration> = Vec::new();
    let mut root: Option<Configuration> = None;
    let mut seen_root = false;

    loop {
        let event = reader.read_event().map_err(|e| ConfigError::Xml {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(e) => match e.name().as_ref() {
                MODULE => {
                    if stack.is_empty() && seen_root {
                        return Err(multiple_roots());
                    }
                    seen_root = true;
                    stack.push(Configuration::new(module_name(&e)?));
                }
                PROPERTY => apply_property(&e, stack.last_mut(), resolver)?,
                other => return Err(unexpected_element(other)),
            },
            Event::Empty(e) => match e.name().as_ref() {
                MODULE => {
                    if stack.is_empty() && seen_root {
                        return Err(multiple_roots());
                    }
                    seen_root = true;
                    let module = Configuration::new(module_name(&e)?);
                    attach(module, &mut stack, &mut root, omit_ignored_modules);
                }
                PROPERTY => apply_property(&e, stack.last_mut(), resolver)?,
                other => return Err(unexpected_element(other)),
            },
            Event::End(e) => {
                if e.name().as_ref() == MODULE {
                    let module = stack.pop().ok_or_else(|| ConfigError::Invalid {
                        message: "unbalanced </module>".to_string(),
                    })?;
                    attach(module, &mut stack, &mut root, omit_ignored_modules);
                }
            }
            Event::Eof => break,
            // Declarations, doctype, comments and whitespace carry nothing.
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(ConfigError::Invalid {
            message: "unclosed <module> element".to_string(),
        });
    }

    root.ok_or_else(|| ConfigError::Invalid {
        message: if seen_root {
            "root module is ignored".to_string()
        } else {
            "no <module> element found".to_string()
        },
    })
}

/// Load a configuration from an XML file.
pub fn load_configuration_file(
    path: &Path,
    resolver: &dyn PropertyResolver,
    omit_ignored_modules: bool,
) -> Result<Configuration, ConfigError> {
    let xml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = load_configuration(&xml, resolver, omit_ignored_modules)?;
    tracing::debug!(
        path = %path.display(),
        root = config.name(),
        modules = config.children().len(),
        "loaded check configuration"
    );
    Ok(config)
}

/// Attach a finished module to its parent, or make it the root.
fn attach(
    module: Configuration,
    stack: &mut [Configuration],
    root: &mut Option<Configuration>,
    omit_ignored_modules: bool,
) {
    if omit_ignored_modules && module.is_ignored() {
        tracing::debug!(module = module.name(), "omitting ignored module");
        return;
    }
    match stack.last_mut() {
        Some(parent) => parent.add_child(module),
        None => *root = Some(module),
    }
}

fn apply_property(
    element: &BytesStart<'_>,
    target: Option<&mut Configuration>,
    resolver: &dyn PropertyResolver,
) -> Result<(), ConfigError> {
    let target = target.ok_or_else(|| ConfigError::Invalid {
        message: "<property> outside of a <module>".to_string(),
    })?;
    let name = attribute(element, "name")?.ok_or_else(|| ConfigError::Invalid {
        message: format!("<property> without a name in module '{}'", target.name()),
    })?;
    let raw = attribute(element, "value")?.ok_or_else(|| ConfigError::Invalid {
        message: format!("property '{name}' of module '{}' has no value", target.name()),
    })?;
    let default = attribute(element, "default")?;
    let value = expand(&raw, resolver, default.as_deref())?;
    target.set_property(name, value);
    Ok(())
}

fn module_name(element: &BytesStart<'_>) -> Result<String, ConfigError> {
    attribute(element, "name")?.ok_or_else(|| ConfigError::Invalid {
        message: "<module> without a name".to_string(),
    })
}

fn attribute(element: &BytesStart<'_>, key: &str) -> Result<Option<String>, ConfigError> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| ConfigError::Xml {
            position: 0,
            message: e.to_string(),
        })?;
        if attr.key.as_ref() == key.as_bytes() {
            let value = attr.unescape_value().map_err(|e| ConfigError::Xml {
                position: 0,
                message: e.to_string(),
            })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn unexpected_element(name: &[u8]) -> ConfigError {
    ConfigError::Invalid {
        message: format!("unexpected element <{}>", String::from_utf8_lossy(name)),
    }
}

fn multiple_roots() -> ConfigError {
    ConfigError::Invalid {
        message: "more than one root <module>".to_string(),
    }
}
