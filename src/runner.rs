use crate::error::Result;
use crate::input::{Decoder, Reader, MAX_DATAGRAM_SIZE};
use crate::model::Record;
use crate::output::{Formatter, Writer};

// (Reader -> Decoder -> Record) -> (Formatter -> Writer)
//           producer                   consumer
//
// Reader    == UDP socket        ->  datagram bytes
// Decoder   == datagram bytes    ->  Request (column-wise wire message)
// Record    == Request           ->  Record (timers and tags resolved)
// Formatter == Record            ->  text block
// Writer    == text block        ->  stdout
//
// One datagram goes all the way through before the next one is read.

pub struct Runner {
    reader: Box<dyn Reader>,
    decoder: Box<dyn Decoder>,
    consumer: Consumer,
}

impl Runner {
    pub fn new(
        reader: Box<dyn Reader>,
        decoder: Box<dyn Decoder>,
        formatter: Box<dyn Formatter>,
        writer: Box<dyn Writer>,
    ) -> Self {
        Self {
            reader,
            decoder,
            consumer: Consumer::new(writer, formatter),
        }
    }

    /// Serves datagrams until the reader is exhausted. A receive error ends
    /// the loop with an error, a datagram that fails to decode doesn't.
    pub fn run(&mut self) -> Result<()> {
        let mut buf = vec![0; MAX_DATAGRAM_SIZE];
        loop {
            let len = match self.reader.read(&mut buf) {
                Ok(Some(len)) => len,
                Ok(None) => break,
                Err(e) => return Err(("datagram receive failed", e).into()),
            };
            self.process(&buf[..len])?;
        }
        Ok(())
    }

    pub fn process(&mut self, datagram: &[u8]) -> Result<()> {
        if datagram.is_empty() {
            return Ok(());
        }

        let request = match self.decoder.decode(datagram) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(len = datagram.len(), error = %err, "skipping undecodable datagram");
                return Ok(());
            }
        };

        self.consumer.write(&Record::from_request(&request))
    }
}

struct Consumer {
    writer: Box<dyn Writer>,
    formatter: Box<dyn Formatter>,
}

impl Consumer {
    fn new(writer: Box<dyn Writer>, formatter: Box<dyn Formatter>) -> Self {
        Self { writer, formatter }
    }

    fn write(&mut self, record: &Record) -> Result<()> {
        let buf = self.formatter.format(record)?;

        self.writer
            .write(&buf)
            .map_err(|e| ("writer failed", e))?;

        Ok(())
    }
}
