use wsgen_wsdl::{self as wsdl, error, types::Definition};

mod render;
mod sanitizer;

pub use render::{title, Options, Render};
pub use sanitizer::Sanitize;

/// Reads, sanitizes and renders the WSDL document at `location`.
pub fn from_url<S: AsRef<str>>(location: S, options: &Options) -> Result<String, error::Error> {
    let definition = wsdl::parse(location)?;
    Ok(from_definition(definition, options))
}

/// Decodes, sanitizes and renders an in-memory WSDL document.
pub fn from_bytes(bytes: &[u8], options: &Options) -> Result<String, error::Error> {
    let definition = wsdl::parse_bytes(bytes)?;
    Ok(from_definition(definition, options))
}

pub fn from_definition(definition: Definition, options: &Options) -> String {
    render(&sanitize(definition), options)
}

pub fn sanitize(definition: Definition) -> Definition {
    log::debug!("sanitizing definition {}", definition.name);
    definition.sanitize()
}

pub fn render(definition: &Definition, options: &Options) -> String {
    log::debug!(
        "rendering {} message(s), {} element(s) into package {}",
        definition.messages.len(),
        definition.types.schema.elements.len(),
        options.package
    );
    definition.render(options)
}
