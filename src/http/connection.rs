use std::sync::Arc;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::dispatcher::Dispatcher;
use crate::http::writer::ResponseWriter;

/// Services exactly one request on an accepted stream, then closes it.
pub struct Connection<S> {
    stream: S,
    dispatcher: Arc<Dispatcher>,
    read_buffer_size: usize,
    read_timeout: Option<Duration>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Receiving,
    Dispatching(BytesMut),
    Responding(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            stream,
            dispatcher,
            read_buffer_size: 1024,
            read_timeout: None,
            state: ConnectionState::Receiving,
        }
    }

    /// Caps the single receive. Bytes beyond this are never read.
    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Drives the connection to `Closed`.
    ///
    /// Receive failures are returned. Write failures are logged and
    /// swallowed. The stream is shut down on every path that reaches
    /// `Closed`.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Receiving => {
                    let received = match self.receive().await {
                        Ok(buf) => buf,
                        Err(e) => {
                            self.close().await;
                            return Err(e);
                        }
                    };
                    self.state = ConnectionState::Dispatching(received);
                }

                ConnectionState::Dispatching(buf) => {
                    self.state = match self.dispatcher.handle(&buf[..]) {
                        Some(response) => {
                            tracing::debug!(
                                status = response.status.as_u16(),
                                body_len = response.body.len(),
                                "response ready"
                            );
                            ConnectionState::Responding(ResponseWriter::new(&response))
                        }
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Responding(writer) => {
                    if let Err(e) = writer.write_to_stream(&mut self.stream).await {
                        tracing::warn!(
                            error = %e,
                            written = writer.written(),
                            total = writer.len(),
                            "failed to write response"
                        );
                    }
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    self.close().await;
                    break;
                }
            }
        }

        Ok(())
    }

    /// One read of at most `read_buffer_size` bytes.
    async fn receive(&mut self) -> anyhow::Result<BytesMut> {
        let mut buf = BytesMut::zeroed(self.read_buffer_size);

        let n = match self.read_timeout {
            Some(limit) => tokio::time::timeout(limit, self.stream.read(&mut buf))
                .await
                .map_err(|_| anyhow::anyhow!("no request received within {:?}", limit))??,
            None => self.stream.read(&mut buf).await?,
        };

        buf.truncate(n);
        Ok(buf)
    }

    async fn close(&mut self) {
        self.state = ConnectionState::Closed;
        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(error = %e, "shutdown after response failed");
        }
    }
}
