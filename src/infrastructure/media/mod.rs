mod ytdlp_extractor;

pub use ytdlp_extractor::YtDlpExtractor;
