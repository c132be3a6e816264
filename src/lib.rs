#![deny(missing_docs)]

//! An AWS Lambda function answering every invocation with `{"res": "OKv4"}`.
//!
//! The response is shaped for an API Gateway proxy integration: textual status
//! code, a JSON content-type header and the encoded payload as body.
//!
//! ```
//! let envelope = okv4_function::handler((), ()).unwrap();
//! assert_eq!(envelope.status_code, "200");
//! assert_eq!(envelope.body, r#"{"res": "OKv4"}"#);
//! ```

mod handler;
mod response;

pub use crate::{
    handler::{handler, Payload, OKV4},
    response::{respond, Envelope, CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON},
};
