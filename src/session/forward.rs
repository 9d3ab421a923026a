//! Lifecycle of one running port-forward

use std::sync::Arc;

use log::debug;
use tokio::io::AsyncReadExt;
use tokio::process::Child;
use tokio::task::JoinHandle;

use crate::kubectl::{OutputStream, ProcessHandle};

/// Read buffer size for forwarded output
const CHUNK_SIZE: usize = 4096;

/// Which pipe a chunk came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

/// Output as it arrived from the forward process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputChunk {
    pub stream: StreamKind,
    pub text: String,
}

/// Callback invoked once per chunk, in arrival order per stream
pub type Observer = Arc<dyn Fn(OutputChunk) + Send + Sync>;

/// Tracks one forward subprocess and the tasks streaming its output.
///
/// Dropping the session stops tracking only: the process is not killed and
/// its output keeps flowing to the observer until the process exits.
pub struct ForwardSession {
    child: Option<Child>,
    readers: Vec<JoinHandle<()>>,
}

impl ForwardSession {
    /// Start streaming `handle`'s output to `observer`
    pub fn attach(handle: ProcessHandle, observer: Observer) -> Self {
        let (child, stdout, stderr) = handle.into_parts();

        let mut readers = Vec::with_capacity(2);
        if let Some(stdout) = stdout {
            readers.push(tokio::spawn(pump(
                stdout,
                StreamKind::Stdout,
                Arc::clone(&observer),
            )));
        }
        if let Some(stderr) = stderr {
            readers.push(tokio::spawn(pump(stderr, StreamKind::Stderr, observer)));
        }

        Self { child, readers }
    }

    pub fn pid(&self) -> Option<u32> {
        self.child.as_ref().and_then(|c| c.id())
    }

    /// True while any output stream is still open
    pub fn is_streaming(&self) -> bool {
        self.readers.iter().any(|r| !r.is_finished())
    }

    /// Wait until every output stream has closed
    pub async fn wait_streams(self) {
        for reader in self.readers {
            let _ = reader.await;
        }
    }
}

impl std::fmt::Debug for ForwardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForwardSession")
            .field("pid", &self.pid())
            .field("streaming", &self.is_streaming())
            .finish()
    }
}

async fn pump(mut reader: OutputStream, stream: StreamKind, observer: Observer) {
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => observer(OutputChunk {
                stream,
                text: String::from_utf8_lossy(&buf[..n]).into_owned(),
            }),
            Err(e) => {
                debug!("Forward {:?} stream failed: {}", stream, e);
                break;
            }
        }
    }
    debug!("Forward {:?} stream closed", stream);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::io::AsyncWriteExt;

    fn collecting_observer() -> (Observer, Arc<Mutex<Vec<OutputChunk>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let observer: Observer = Arc::new(move |chunk| sink.lock().unwrap().push(chunk));
        (observer, seen)
    }

    async fn wait_for_chunks(seen: &Arc<Mutex<Vec<OutputChunk>>>, count: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while seen.lock().unwrap().len() < count {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("chunks should arrive");
    }

    #[tokio::test]
    async fn test_attach_delivers_stdout() {
        let handle = ProcessHandle::from_readers(
            Box::new(&b"Forwarding from 127.0.0.1:8080 -> 80\n"[..]),
            None,
        );
        let (observer, seen) = collecting_observer();
        let session = ForwardSession::attach(handle, observer);
        assert!(session.pid().is_none());
        session.wait_streams().await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].stream, StreamKind::Stdout);
        assert_eq!(seen[0].text, "Forwarding from 127.0.0.1:8080 -> 80\n");
    }

    #[tokio::test]
    async fn test_chunks_arrive_in_order_while_open() {
        let (mut writer, reader) = tokio::io::duplex(64);
        let handle = ProcessHandle::from_readers(Box::new(reader), None);
        let (observer, seen) = collecting_observer();
        let session = ForwardSession::attach(handle, observer);

        writer.write_all(b"first").await.unwrap();
        wait_for_chunks(&seen, 1).await;
        assert!(session.is_streaming());

        writer.write_all(b"second").await.unwrap();
        wait_for_chunks(&seen, 2).await;

        drop(writer);
        session.wait_streams().await;

        let texts: Vec<String> = seen.lock().unwrap().iter().map(|c| c.text.clone()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_stderr_is_tagged() {
        let handle = ProcessHandle::from_readers(
            Box::new(&b""[..]),
            Some(Box::new(&b"unable to listen on port 8080\n"[..]) as OutputStream),
        );
        let (observer, seen) = collecting_observer();
        ForwardSession::attach(handle, observer).wait_streams().await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].stream, StreamKind::Stderr);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_attach_to_real_process() {
        use crate::kubectl::{CommandRunner, KubectlRunner};

        let runner = KubectlRunner::new("sh");
        let handle = runner
            .run_async(&["-c".to_string(), "echo one; echo two >&2".to_string()])
            .unwrap();
        let (observer, seen) = collecting_observer();
        let session = ForwardSession::attach(handle, observer);
        assert!(session.pid().is_some());
        session.wait_streams().await;

        let seen = seen.lock().unwrap();
        let stdout: String = seen
            .iter()
            .filter(|c| c.stream == StreamKind::Stdout)
            .map(|c| c.text.as_str())
            .collect();
        let stderr: String = seen
            .iter()
            .filter(|c| c.stream == StreamKind::Stderr)
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(stdout, "one\n");
        assert_eq!(stderr, "two\n");
    }

    #[tokio::test]
    async fn test_drop_does_not_stop_streaming() {
        let (mut writer, reader) = tokio::io::duplex(64);
        let handle = ProcessHandle::from_readers(Box::new(reader), None);
        let (observer, seen) = collecting_observer();
        drop(ForwardSession::attach(handle, observer));

        writer.write_all(b"still here").await.unwrap();
        wait_for_chunks(&seen, 1).await;
        assert_eq!(seen.lock().unwrap()[0].text, "still here");
    }
}
