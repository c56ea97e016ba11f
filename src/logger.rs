const LOG_CONFIG_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if let Err(e) = log4rs::init_file(LOG_CONFIG_FILE, Default::default()) {
        eprintln!("Logging disabled, unable to load '{}': {}", LOG_CONFIG_FILE, e);
    }
}

pub fn log_code_table<'a, S, I>(entries: I)
where
    S: std::fmt::Debug + 'a,
    I: IntoIterator<Item = (&'a S, &'a crate::huffman::BitString)>,
{
    for (symbol, code) in entries {
        log::debug!("{:?} -> {} ({} bits)", symbol, code, code.len());
    }
}
