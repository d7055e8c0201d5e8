use wsgen_wsdl::types::{Definition, Input, Message, Operation, Output, Part, PortType};

const SCHEMA_PREFIX: &str = "xsd:";
const TARGET_PREFIX: &str = "tns:";

/// Strips namespace prefixes ahead of rendering. Every occurrence of the
/// prefix text is removed, not only a leading one.
pub trait Sanitize {
    fn sanitize(self) -> Self;
}

impl Sanitize for Part {
    fn sanitize(self) -> Self {
        Self {
            ty: self.ty.replace(SCHEMA_PREFIX, ""),
            ..self
        }
    }
}

impl Sanitize for Message {
    fn sanitize(self) -> Self {
        Self {
            part: self.part.sanitize(),
            ..self
        }
    }
}

impl Sanitize for Input {
    fn sanitize(self) -> Self {
        Self {
            message: self.message.replace(TARGET_PREFIX, ""),
        }
    }
}

impl Sanitize for Output {
    fn sanitize(self) -> Self {
        Self {
            message: self.message.replace(TARGET_PREFIX, ""),
        }
    }
}

impl Sanitize for Operation {
    fn sanitize(self) -> Self {
        Self {
            input: self.input.sanitize(),
            output: self.output.sanitize(),
            ..self
        }
    }
}

impl Sanitize for PortType {
    fn sanitize(self) -> Self {
        Self {
            operation: self.operation.sanitize(),
            ..self
        }
    }
}

impl Sanitize for Definition {
    fn sanitize(self) -> Self {
        Self {
            messages: self.messages.into_iter().map(Sanitize::sanitize).collect(),
            port_type: self.port_type.sanitize(),
            ..self
        }
    }
}
