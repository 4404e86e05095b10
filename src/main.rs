use hpackx_codec::binary::{split_into_groups, trace_groups};
use hpackx_codec::{Decoder, Encoder, INDEX_WIDTH};

const SAMPLE_BLOCK: &str = ":authority: application/json\r\n\
                            :method: post\r\n\
                            :path: application/json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let encoder = Encoder::standard();
    let encoded = encoder.encode_block(SAMPLE_BLOCK)?;
    tracing::info!(bits = %encoded, "encoded sample block");
    trace_groups(&split_into_groups(&encoded, INDEX_WIDTH)?, "encoded");

    let decoder = Decoder::standard();
    let decoded = decoder.decode_block(&encoded)?;
    tracing::info!(block = ?decoded, "decoded sample block");

    println!("{}", encoded);
    print!("{}", decoded);
    Ok(())
}
