use wsgen_wsdl::{
    namespace::strip_namespace,
    types::{Definition, Element, Message, Operation, Part},
};

/// Settings shared by every template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub package: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            package: "ws".to_owned(),
        }
    }
}

/// Renders a model node through its Go source template.
pub trait Render {
    fn render(&self, options: &Options) -> String;
}

/// Upper-cases the first character of `name` and leaves the rest alone.
pub fn title(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn render_all(all: &[impl Render], options: &Options) -> String {
    all.iter().map(|item| item.render(options)).collect()
}

impl Render for Definition {
    fn render(&self, options: &Options) -> String {
        let messages = render_all(&self.messages, options);
        let elements = render_all(&self.types.schema.elements, options);
        let operation = self.port_type.operation.render(options);

        format!(
            "package {}\n{}{}{}",
            options.package, messages, elements, operation
        )
    }
}

impl Render for Message {
    fn render(&self, options: &Options) -> String {
        format!(
            "\ntype {} struct {{\n{}}}\n",
            title(&self.name),
            self.part.render(options)
        )
    }
}

impl Render for Part {
    fn render(&self, _: &Options) -> String {
        if self.name.is_empty() {
            return String::new();
        }

        let ty = if !self.ty.is_empty() {
            strip_namespace(&self.ty).to_owned()
        } else if !self.element.is_empty() {
            title(strip_namespace(&self.element))
        } else {
            log::warn!("part {} has neither a type nor an element", self.name);
            "interface{}".to_owned()
        };

        format!("\t{} {}\n", title(&self.name), ty)
    }
}

impl Render for Element {
    fn render(&self, _: &Options) -> String {
        format!("\ntype {} struct {{\n}}\n", title(&self.name))
    }
}

impl Render for Operation {
    fn render(&self, _: &Options) -> String {
        if self.name.is_empty() {
            return String::new();
        }

        format!(
            "\nfunc {}(req *{}) (*{}, error) {{\n}}\n",
            title(&self.name),
            title(strip_namespace(&self.input.message)),
            title(strip_namespace(&self.output.message))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wsgen_wsdl::types::{Input, Output, PortType, Schema, Types};

    fn element(name: &str) -> Element {
        Element {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn title_capitalises_only_the_first_letter() {
        assert_eq!(title("sayHello"), "SayHello");
        assert_eq!(title("say hello"), "Say hello");
        assert_eq!(title("Greeting"), "Greeting");
        assert_eq!(title("élan"), "Élan");
        assert_eq!(title(""), "");
    }

    #[test]
    fn part_renders_a_field() {
        let part = Part {
            name: "firstName".into(),
            ty: "string".into(),
            element: String::new(),
        };

        assert_eq!(part.render(&Options::default()), "\tFirstName string\n");
    }

    #[test]
    fn part_type_is_stripped_but_not_title_cased() {
        let part = Part {
            name: "count".into(),
            ty: "s:int".into(),
            element: String::new(),
        };

        assert_eq!(part.render(&Options::default()), "\tCount int\n");
    }

    #[test]
    fn part_falls_back_to_element_reference() {
        let part = Part {
            name: "body".into(),
            ty: String::new(),
            element: "xsd1:tradePriceRequest".into(),
        };

        assert_eq!(
            part.render(&Options::default()),
            "\tBody TradePriceRequest\n"
        );
    }

    #[test]
    fn untyped_part_gets_empty_interface() {
        let part = Part {
            name: "any".into(),
            ..Default::default()
        };

        assert_eq!(part.render(&Options::default()), "\tAny interface{}\n");
    }

    #[test]
    fn message_without_part_renders_empty_struct() {
        let message = Message {
            name: "Empty".into(),
            part: Part::default(),
        };

        assert_eq!(
            message.render(&Options::default()),
            "\ntype Empty struct {\n}\n"
        );
    }

    #[test]
    fn unnamed_operation_renders_nothing() {
        assert_eq!(Operation::default().render(&Options::default()), "");

        let definition = Definition {
            port_type: PortType {
                name: "Ports".into(),
                operation: Operation {
                    input: Input {
                        message: "In".into(),
                    },
                    output: Output {
                        message: "Out".into(),
                    },
                    ..Default::default()
                },
            },
            ..Default::default()
        };

        assert!(!definition.render(&Options::default()).contains("func"));
    }

    #[test]
    fn operation_strips_and_title_cases_message_references() {
        let operation = Operation {
            name: "getQuote".into(),
            input: Input {
                message: "tns:getQuoteRequest".into(),
            },
            output: Output {
                message: "quoteResponse".into(),
            },
        };

        assert_eq!(
            operation.render(&Options::default()),
            "\nfunc GetQuote(req *GetQuoteRequest) (*QuoteResponse, error) {\n}\n"
        );
    }

    #[test]
    fn one_empty_struct_per_schema_element_in_order() {
        let definition = Definition {
            types: Types {
                schema: Schema {
                    elements: vec![element("tradePriceRequest"), element("TradePrice")],
                    ..Default::default()
                },
            },
            ..Default::default()
        };

        assert_eq!(
            definition.render(&Options::default()),
            "package ws\n\ntype TradePriceRequest struct {\n}\n\ntype TradePrice struct {\n}\n"
        );
    }

    #[test]
    fn empty_definition_renders_only_the_header() {
        let options = Options {
            package: "stubs".into(),
        };

        assert_eq!(Definition::default().render(&options), "package stubs\n");
    }
}
