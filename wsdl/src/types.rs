#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub ty: String,
    pub element: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub name: String,
    pub part: Part,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub message: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub message: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub input: Input,
    pub output: Output,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct PortType {
    pub name: String,
    pub operation: Operation,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub location: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub name: String,
    pub binding: String,
    pub address: Address,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    pub documentation: String,
    pub port: Port,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SequenceElement {
    pub name: String,
    pub ty: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub element: SequenceElement,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ComplexType {
    pub sequence: Sequence,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub complex_type: ComplexType,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub element_form_default: String,
    pub target_namespace: String,
    pub elements: Vec<Element>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Types {
    pub schema: Schema,
}

/// Root of a parsed WSDL document. Sections missing from the document keep
/// their `Default` value.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub messages: Vec<Message>,
    pub port_type: PortType,
    pub service: Service,
    pub types: Types,
}
