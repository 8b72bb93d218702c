use super::decoder::{decode_flags, decode_request};
use super::encoder::{encode_header, write_question, write_record};
use authdns_application::use_cases::{ReloadZonesUseCase, ResolveQuestionUseCase};
use authdns_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns raw request datagrams into raw response datagrams.
#[derive(Clone)]
pub struct DnsServerHandler {
    resolver: Arc<ResolveQuestionUseCase>,
    reload_per_query: Option<Arc<ReloadZonesUseCase>>,
}

impl DnsServerHandler {
    pub fn new(resolver: Arc<ResolveQuestionUseCase>) -> Self {
        Self {
            resolver,
            reload_per_query: None,
        }
    }

    /// Re-reads all zones before answering each query.
    pub fn with_reload_per_query(mut self, reload: Arc<ReloadZonesUseCase>) -> Self {
        self.reload_per_query = Some(reload);
        self
    }

    /// Decodes `request`, resolves its question and encodes the answer.
    ///
    /// The response is the header, the re-encoded question and one record
    /// per resolved answer, in zone order.
    pub fn build_response(&self, request: &[u8]) -> Result<Vec<u8>, DomainError> {
        let decoded = decode_request(request)?;
        if decoded.question_count != 1 {
            debug!(
                id = decoded.transaction_id,
                qdcount = decoded.question_count,
                "Answering only the first question"
            );
        }
        let flags = decode_flags(decoded.flags);
        let resolution = self.resolver.execute(&decoded.question);

        let answer_count = u16::try_from(resolution.answer_count()).unwrap_or(u16::MAX);
        if usize::from(answer_count) < resolution.answer_count() {
            warn!(
                domain = %resolution.name,
                records = resolution.answer_count(),
                "Answer count exceeds header limit, truncating"
            );
        }

        let mut response = Vec::with_capacity(request.len() + resolution.answer_count() * 14);
        response.extend_from_slice(&encode_header(decoded.transaction_id, flags, answer_count));
        write_question(&mut response, &resolution.name, resolution.query_type);
        for record in resolution.records.iter().take(usize::from(answer_count)) {
            write_record(&mut response, record);
        }

        debug!(
            id = decoded.transaction_id,
            domain = %resolution.name,
            qtype = decoded.question.qtype,
            answers = answer_count,
            bytes = response.len(),
            "Response built"
        );

        Ok(response)
    }

    /// Handles one datagram. Returns `None` when no response should be sent.
    pub async fn handle_raw_udp(&self, request: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        if let Some(reload) = &self.reload_per_query {
            if let Err(e) = reload.execute().await {
                warn!(error = %e, "Per-query zone reload failed, answering from previous zones");
            }
        }

        match self.build_response(request) {
            Ok(response) => Some(response),
            Err(e) => {
                debug!(
                    client = %client,
                    bytes = request.len(),
                    error = %e,
                    "Dropping request"
                );
                None
            }
        }
    }
}
