use log::{debug, trace};
use std::io::Write;

use super::block::Block;
use crate::config::OutputFormat;
use crate::error::Result;

/// Outcome of a generator run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Blocks written during the run
    pub blocks: u64,
    /// Descriptor the next open would receive
    pub next_descriptor: u64,
}

/// Block producer owning the descriptor counter for one run
///
/// Create a fresh generator per run; descriptors start at 0 and are handed
/// out with post-increment semantics.
#[derive(Debug, Clone)]
pub struct Generator {
    identifier: String,
    next_fd: u64,
}

impl Generator {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            next_fd: 0,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn next_descriptor(&self) -> u64 {
        self.next_fd
    }

    /// Open `file` with the next descriptor
    pub fn next_block(&mut self, file: &str) -> Block {
        let fd = self.next_fd;
        self.next_fd += 1;
        Block::new(&self.identifier, file, fd)
    }

    /// Blocks for `iters` passes over `files`, lazily allocated
    pub fn blocks<'a>(
        &'a mut self,
        files: &'a [String],
        iters: usize,
    ) -> impl Iterator<Item = Block> + 'a {
        (0..iters)
            .flat_map(move |_| files.iter())
            .map(move |file| self.next_block(file))
    }

    /// Write every block of the run to `out` in `format`
    ///
    /// `out` is flushed before returning. Write failures abort the run.
    pub fn run<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        files: &[String],
        iters: usize,
        format: OutputFormat,
    ) -> Result<RunSummary> {
        debug!(
            "generating {} pass(es) over {} file(s) for '{}' ({})",
            iters,
            files.len(),
            self.identifier,
            format
        );

        let mut blocks = 0;
        for block in self.blocks(files, iters) {
            trace!("block fd={} file={}", block.fd, block.file);
            block.write_to(out, format)?;
            blocks += 1;
        }
        out.flush()?;

        Ok(RunSummary {
            blocks,
            next_descriptor: self.next_fd,
        })
    }
}

/// Text-format run with a fresh descriptor counter
pub fn run<W: Write + ?Sized>(
    out: &mut W,
    identifier: &str,
    files: &[String],
    iters: usize,
) -> Result<RunSummary> {
    Generator::new(identifier).run(out, files, iters, OutputFormat::Text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::filenames;

    fn default_files() -> Vec<String> {
        filenames(5).collect()
    }

    #[test]
    fn test_descriptors_post_increment() {
        let mut generator = Generator::new("A");
        assert_eq!(generator.next_descriptor(), 0);

        let first = generator.next_block("test_0");
        let second = generator.next_block("test_0");

        assert_eq!(first.fd, 0);
        assert_eq!(second.fd, 1);
        assert_eq!(generator.next_descriptor(), 2);
    }

    #[test]
    fn test_blocks_iteration_order() {
        let files = default_files();
        let mut generator = Generator::new("A");
        let blocks: Vec<Block> = generator.blocks(&files, 5).collect();

        assert_eq!(blocks.len(), 25);
        for (k, block) in blocks.iter().enumerate() {
            assert_eq!(block.fd, k as u64);
            assert_eq!(block.file, format!("test_{}", k % 5));
            assert_eq!(block.payload, format!("A-{}_", k));
        }
    }

    #[test]
    fn test_blocks_lazy() {
        let files = default_files();
        let mut generator = Generator::new("A");
        let taken: Vec<Block> = generator.blocks(&files, 5).take(3).collect();

        assert_eq!(taken.len(), 3);
        assert_eq!(generator.next_descriptor(), 3);
    }

    #[test]
    fn test_run_summary() {
        let files = default_files();
        let mut out = Vec::new();
        let summary = run(&mut out, "A", &files, 5).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                blocks: 25,
                next_descriptor: 25
            }
        );
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 100);
    }

    #[test]
    fn test_run_second_pass_restarts_filenames() {
        let files = default_files();
        let mut out = Vec::new();
        run(&mut out, "A", &files, 2).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            &lines[20..24],
            ["open test_0", "read 5 9999999999", "write 5 A-5_", "close 5"]
        );
    }

    #[test]
    fn test_run_zero_iters_or_files() {
        let mut out = Vec::new();
        let summary = run(&mut out, "A", &default_files(), 0).unwrap();
        assert_eq!(summary.blocks, 0);
        assert!(out.is_empty());

        let summary = run(&mut out, "A", &[], 5).unwrap();
        assert_eq!(summary.blocks, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_generators_are_independent() {
        let files = default_files();
        let mut first = Vec::new();
        let mut second = Vec::new();
        run(&mut first, "A", &files, 1).unwrap();
        run(&mut second, "A", &files, 1).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_propagates_write_failure() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = run(&mut Broken, "A", &default_files(), 1).unwrap_err();
        assert!(matches!(err, crate::FsstressError::IoError(_)));
    }
}
