use pretty_assertions::assert_eq;
use wsgen_codegen::{from_bytes, from_url, render, sanitize, Options};
use wsgen_wsdl::parse_bytes;

const HELLO_SERVICE: &str = r#"<definitions name="HelloService"
   targetNamespace="http://www.examples.com/wsdl/HelloService.wsdl"
   xmlns="http://schemas.xmlsoap.org/wsdl/"
   xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
   xmlns:tns="http://www.examples.com/wsdl/HelloService.wsdl"
   xmlns:xsd="http://www.w3.org/2001/XMLSchema">
   <message name="SayHelloRequest">
      <part name="firstName" type="xsd:string"/>
   </message>
   <message name="SayHelloResponse">
      <part name="greeting" type="xsd:string"/>
   </message>
   <portType name="Hello_PortType">
      <operation name="sayHello">
         <input message="tns:SayHelloRequest"/>
         <output message="tns:SayHelloResponse"/>
      </operation>
   </portType>
   <service name="Hello_Service">
      <documentation>WSDL File for HelloService</documentation>
      <port binding="tns:Hello_Binding" name="Hello_Port">
         <soap:address location="http://www.examples.com/SayHello/"/>
      </port>
   </service>
</definitions>"#;

const HELLO_SERVICE_GO: &str = "package ws

type SayHelloRequest struct {
\tFirstName string
}

type SayHelloResponse struct {
\tGreeting string
}

func SayHello(req *SayHelloRequest) (*SayHelloResponse, error) {
}
";

#[test]
fn hello_service_matches_golden_output() {
    let output = from_bytes(HELLO_SERVICE.as_bytes(), &Options::default()).unwrap();
    assert_eq!(output, HELLO_SERVICE_GO);
}

#[test]
fn hello_service_file_matches_golden_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.wsdl");
    std::fs::write(&path, HELLO_SERVICE).unwrap();

    let output = from_url(path.display().to_string(), &Options::default()).unwrap();
    assert_eq!(output, HELLO_SERVICE_GO);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.wsdl");

    assert!(from_url(path.display().to_string(), &Options::default()).is_err());
}

#[test]
fn unsanitized_tree_renders_the_same() {
    let definition = parse_bytes(HELLO_SERVICE.as_bytes()).unwrap();
    let options = Options::default();

    assert_eq!(
        render(&definition, &options),
        render(&sanitize(definition), &options)
    );
}

#[test]
fn document_without_port_type_service_or_types() {
    let output = from_bytes(
        br#"<definitions name="MessagesOnly" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <message name="Ping"><part name="seq" type="xsd:int"/></message>
</definitions>"#,
        &Options::default(),
    )
    .unwrap();

    assert_eq!(output, "package ws\n\ntype Ping struct {\n\tSeq int\n}\n");
}

#[test]
fn stock_quote_renders_elements_after_messages() {
    let output = from_bytes(
        include_bytes!("../../resources/stockquote.wsdl"),
        &Options::default(),
    )
    .unwrap();

    assert_eq!(
        output,
        "package ws

type GetLastTradePriceInput struct {
\tBody TradePriceRequest
}

type GetLastTradePriceOutput struct {
\tBody TradePrice
}

type TradePriceRequest struct {
}

type TradePrice struct {
}

func GetLastTradePrice(req *GetLastTradePriceInput) (*GetLastTradePriceOutput, error) {
}
"
    );
}

#[test]
fn malformed_document_is_an_error() {
    assert!(from_bytes(b"<definitions><message>", &Options::default()).is_err());
    assert!(from_bytes(b"", &Options::default()).is_err());
}
