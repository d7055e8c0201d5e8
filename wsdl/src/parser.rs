use quick_xml::{
    events::{attributes::Attributes, BytesStart, Event},
    Reader,
};
use std::io::BufRead;

use super::{
    error,
    namespace::split_namespaced_name,
    types::{
        Address, ComplexType, Definition, Element, Input, Message, Operation, Output, Part, Port,
        PortType, Schema, Sequence, SequenceElement, Service, Types,
    },
};

/// Looks up `names` among `attributes`. Attributes that are absent come back
/// as empty strings.
fn get_attributes<B: BufRead, const N: usize>(
    reader: &Reader<B>,
    attributes: Attributes<'_>,
    names: [&'static str; N],
) -> Result<[String; N], error::Error> {
    let mut result: [String; N] = std::array::from_fn(|_| String::new());

    for attribute in attributes {
        let attribute = attribute?;
        let key = reader.decode(attribute.key)?;

        if let Some(index) = names.iter().position(|name| key == *name) {
            let value = attribute.unescaped_value()?;
            result[index] = reader.decode(&value)?.to_owned();
        }
    }

    Ok(result)
}

#[derive(Debug)]
enum ParseState {
    Definitions,

    Message(Message),
    Part(Part),

    PortType(PortType),
    Operation(Operation),
    Input(Input),
    Output(Output),

    Service(Service),
    Documentation(String),
    Port(Port),
    Address(Address),

    Types(Types),
    Schema(Schema),
    Element(Element),
    ComplexType(ComplexType),
    Sequence(Sequence),
    SequenceElement(SequenceElement),

    Other(String),
}

#[derive(Default)]
struct Parser {
    definition: Definition,
    root_seen: bool,
}

impl Parser {
    fn parse_xml<B: BufRead>(mut self, mut reader: Reader<B>) -> Result<Definition, error::Error> {
        let mut stack = Vec::new();
        let mut buffer = Vec::new();

        loop {
            match reader.read_event(&mut buffer)? {
                Event::Start(start) => self.handle_start(&mut stack, &reader, &start)?,
                Event::End(..) => self.handle_end(&mut stack),

                Event::Empty(start) => {
                    self.handle_start(&mut stack, &reader, &start)?;
                    self.handle_end(&mut stack);
                }

                Event::Text(text) => {
                    let unescaped = text.unescaped()?;
                    handle_text(&mut stack, reader.decode(&unescaped)?);
                }

                Event::CData(text) => handle_text(&mut stack, reader.decode(text.escaped())?),

                Event::Eof => break,

                _ => (),
            }

            buffer.clear();
        }

        if !stack.is_empty() {
            return Err(error::Error::UnexpectedEof { open: stack.len() });
        }

        if !self.root_seen {
            return Err(error::Error::MissingRootElement);
        }

        Ok(self.definition)
    }

    fn handle_start<B: BufRead>(
        &mut self,
        stack: &mut Vec<ParseState>,
        reader: &Reader<B>,
        start: &BytesStart<'_>,
    ) -> Result<(), error::Error> {
        let (_, local_name) = split_namespaced_name(reader.decode(start.name())?);
        let other = || ParseState::Other(local_name.to_owned());

        let new_state = match stack.last() {
            None if !self.root_seen => {
                if local_name != "definitions" {
                    log::debug!("treating <{}> as the definitions element", local_name);
                }

                let [name] = get_attributes(reader, start.attributes(), ["name"])?;
                self.definition.name = name;
                self.root_seen = true;

                ParseState::Definitions
            }

            None => other(),

            Some(ParseState::Definitions) => match local_name {
                "message" => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    ParseState::Message(Message {
                        name,
                        ..Default::default()
                    })
                }

                "portType" => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    ParseState::PortType(PortType {
                        name,
                        ..Default::default()
                    })
                }

                "service" => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    ParseState::Service(Service {
                        name,
                        ..Default::default()
                    })
                }

                "types" => ParseState::Types(Types::default()),

                _ => other(),
            },

            Some(ParseState::Message(..)) => match local_name {
                "part" => {
                    let [name, ty, element] =
                        get_attributes(reader, start.attributes(), ["name", "type", "element"])?;

                    ParseState::Part(Part { name, ty, element })
                }

                _ => other(),
            },

            Some(ParseState::PortType(..)) => match local_name {
                "operation" => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    ParseState::Operation(Operation {
                        name,
                        ..Default::default()
                    })
                }

                _ => other(),
            },

            Some(ParseState::Operation(..)) => match local_name {
                "input" => {
                    let [message] = get_attributes(reader, start.attributes(), ["message"])?;
                    ParseState::Input(Input { message })
                }

                "output" => {
                    let [message] = get_attributes(reader, start.attributes(), ["message"])?;
                    ParseState::Output(Output { message })
                }

                _ => other(),
            },

            Some(ParseState::Service(..)) => match local_name {
                "documentation" => ParseState::Documentation(String::new()),

                "port" => {
                    let [name, binding] =
                        get_attributes(reader, start.attributes(), ["name", "binding"])?;

                    ParseState::Port(Port {
                        name,
                        binding,
                        ..Default::default()
                    })
                }

                _ => other(),
            },

            Some(ParseState::Port(..)) => match local_name {
                "address" => {
                    let [location] = get_attributes(reader, start.attributes(), ["location"])?;
                    ParseState::Address(Address { location })
                }

                _ => other(),
            },

            Some(ParseState::Types(..)) => match local_name {
                "schema" => {
                    let [element_form_default, target_namespace] = get_attributes(
                        reader,
                        start.attributes(),
                        ["elementFormDefault", "targetNamespace"],
                    )?;

                    ParseState::Schema(Schema {
                        element_form_default,
                        target_namespace,
                        elements: Vec::new(),
                    })
                }

                _ => other(),
            },

            Some(ParseState::Schema(..)) => match local_name {
                "element" => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    ParseState::Element(Element {
                        name,
                        ..Default::default()
                    })
                }

                _ => other(),
            },

            Some(ParseState::Element(..)) => match local_name {
                "complexType" => ParseState::ComplexType(ComplexType::default()),
                _ => other(),
            },

            Some(ParseState::ComplexType(..)) => match local_name {
                "sequence" => ParseState::Sequence(Sequence::default()),
                _ => other(),
            },

            Some(ParseState::Sequence(..)) => match local_name {
                "element" => {
                    let [name, ty] = get_attributes(reader, start.attributes(), ["name", "type"])?;
                    ParseState::SequenceElement(SequenceElement { name, ty })
                }

                _ => other(),
            },

            Some(
                ParseState::Part(..)
                | ParseState::Input(..)
                | ParseState::Output(..)
                | ParseState::Documentation(..)
                | ParseState::Address(..)
                | ParseState::SequenceElement(..)
                | ParseState::Other(..),
            ) => other(),
        };

        if let ParseState::Other(..) = new_state {
            log::trace!("ignoring element <{}>", local_name);
        }

        stack.push(new_state);
        Ok(())
    }

    fn handle_end(&mut self, stack: &mut Vec<ParseState>) {
        let finished_state = match stack.pop() {
            Some(state) => state,
            None => return,
        };

        match (finished_state, stack.last_mut()) {
            (ParseState::Message(message), _) => self.definition.messages.push(message),

            (ParseState::Part(part), Some(ParseState::Message(message))) => {
                if message.part != Part::default() {
                    log::debug!(
                        "message {} has more than one part; keeping {}",
                        message.name,
                        part.name
                    );
                }

                message.part = part;
            }

            (ParseState::PortType(port_type), _) => {
                if self.definition.port_type != PortType::default() {
                    log::warn!("more than one portType; keeping {}", port_type.name);
                }

                self.definition.port_type = port_type;
            }

            (ParseState::Operation(operation), Some(ParseState::PortType(port_type))) => {
                port_type.operation = operation
            }

            (ParseState::Input(input), Some(ParseState::Operation(operation))) => {
                operation.input = input
            }

            (ParseState::Output(output), Some(ParseState::Operation(operation))) => {
                operation.output = output
            }

            (ParseState::Service(service), _) => {
                if self.definition.service != Service::default() {
                    log::warn!("more than one service; keeping {}", service.name);
                }

                self.definition.service = service;
            }

            (ParseState::Documentation(text), Some(ParseState::Service(service))) => {
                service.documentation = text
            }

            (ParseState::Port(port), Some(ParseState::Service(service))) => service.port = port,

            (ParseState::Address(address), Some(ParseState::Port(port))) => port.address = address,

            (ParseState::Types(types), _) => {
                if self.definition.types != Types::default() {
                    log::warn!("more than one types section; keeping the last");
                }

                self.definition.types = types;
            }

            (ParseState::Schema(schema), Some(ParseState::Types(types))) => types.schema = schema,

            (ParseState::Element(element), Some(ParseState::Schema(schema))) => {
                schema.elements.push(element)
            }

            (ParseState::ComplexType(complex_type), Some(ParseState::Element(element))) => {
                element.complex_type = complex_type
            }

            (ParseState::Sequence(sequence), Some(ParseState::ComplexType(complex_type))) => {
                complex_type.sequence = sequence
            }

            (ParseState::SequenceElement(element), Some(ParseState::Sequence(sequence))) => {
                sequence.element = element
            }

            _ => (),
        }
    }
}

fn handle_text(stack: &mut [ParseState], text: &str) {
    if let Some(ParseState::Documentation(documentation)) = stack.last_mut() {
        documentation.push_str(text);
    }
}

pub fn parse(bytes: &[u8]) -> Result<Definition, error::Error> {
    Parser::default().parse_xml(Reader::from_reader(bytes))
}
