use anyhow::{bail, Context, Result};
use framesync_core::encoder::encode_frame;
use std::fs;
use tracing::info;

pub fn execute(input: &str, output: &str, length: usize) -> Result<()> {
    info!("Packing data from {} to {}", input, output);

    if length < 2 {
        bail!("Frame length must be at least 2 to carry any payload");
    }
    let body_len = length - 1;

    // Read raw input bytes
    let data =
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    let mut output_data = Vec::new();
    let mut frames = 0usize;

    for chunk in data.chunks(body_len) {
        let frame = if chunk.len() == body_len {
            encode_frame(chunk)
        } else {
            // Zero-pad the final partial body so every frame is full length
            let mut body = chunk.to_vec();
            body.resize(body_len, 0);
            encode_frame(&body)
        };
        output_data.extend_from_slice(&frame);
        frames += 1;
    }

    // Write output file
    fs::write(output, &output_data)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!(
        "Successfully packed {} frames ({} bytes total)",
        frames,
        output_data.len()
    );

    Ok(())
}
