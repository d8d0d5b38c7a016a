use crate::constants::EXTRACTED_TOKENS_DIRECTORY;
use crate::types::Token;
use crate::utils::sanitize_file_name;
use crate::{Error, TechnologyKey};
use csv::{ReaderBuilder, WriterBuilder};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Reads and writes the token sequence of each (technology, company, year).
///
/// Tokens are stored as a single CSV record, optionally gzip-compressed.
pub struct TokenStore {
    root: PathBuf,
    compress: bool,
}

impl TokenStore {
    /// `output_dir` is the directory holding `ExtractedTokens`.
    pub fn new(output_dir: &Path, compress: bool) -> Self {
        TokenStore {
            root: output_dir.join(EXTRACTED_TOKENS_DIRECTORY),
            compress,
        }
    }

    fn file_stem(technology: &TechnologyKey, company: &str, year: &str) -> String {
        format!(
            "token_{}_{}_{}",
            technology.tokenizer.name(),
            sanitize_file_name(company),
            year
        )
    }

    pub fn token_path(
        &self,
        technology: &TechnologyKey,
        company: &str,
        year: &str,
        compressed: bool,
    ) -> PathBuf {
        let extension = if compressed { "csv.gz" } else { "csv" };
        self.root.join(technology.relative_dir()).join(format!(
            "{}.{}",
            Self::file_stem(technology, company, year),
            extension
        ))
    }

    pub fn save(
        &self,
        technology: &TechnologyKey,
        company: &str,
        year: &str,
        tokens: &[Token],
    ) -> Result<PathBuf, Error> {
        let path = self.token_path(technology, company, year, self.compress);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut buffer = Vec::new();
        {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_writer(&mut buffer);
            writer.write_record(tokens)?;
            writer.flush()?;
        }

        if self.compress {
            let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
            encoder.write_all(&buffer)?;
            encoder.finish()?;
        } else {
            fs::write(&path, &buffer)?;
        }

        debug!("Saved {} tokens to {:?}", tokens.len(), path);

        Ok(path)
    }

    /// Loads a token sequence, accepting plain and compressed files alike.
    pub fn load(
        &self,
        technology: &TechnologyKey,
        company: &str,
        year: &str,
    ) -> Result<Vec<Token>, Error> {
        let plain_path = self.token_path(technology, company, year, false);
        let compressed_path = self.token_path(technology, company, year, true);

        let mut content = Vec::new();
        if plain_path.exists() {
            File::open(&plain_path)?.read_to_end(&mut content)?;
        } else if compressed_path.exists() {
            GzDecoder::new(File::open(&compressed_path)?).read_to_end(&mut content)?;
        } else {
            return Err(Error::MissingPrerequisite(plain_path));
        }

        Self::parse_tokens(&content)
    }

    /// Flattens every record of a token file into one sequence.
    pub fn parse_tokens(content: &[u8]) -> Result<Vec<Token>, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content);

        let mut tokens = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read tokens: {}", e)))?;
            tokens.extend(record.iter().filter(|t| !t.is_empty()).map(str::to_string));
        }

        Ok(tokens)
    }
}
