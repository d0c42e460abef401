//! Cover image resizing

use image::ImageReader;
use image::imageops::FilterType;
use std::{io::Cursor, path::Path, sync::Arc};

use cinevault_types::worker::WorkerPool;

use crate::prelude::*;

// Sync cover resizer, runs on a worker thread
fn resize_cover_sync(
	orig_buf: impl AsRef<[u8]>,
	format: image::ImageFormat,
	height: u32,
) -> Result<Vec<u8>, image::error::ImageError> {
	let now = std::time::Instant::now();
	let original = ImageReader::new(Cursor::new(orig_buf.as_ref()))
		.with_guessed_format()?
		.decode()?;
	debug!("decoded [{:.2}ms]", now.elapsed().as_millis());

	let now = std::time::Instant::now();
	// Width is unconstrained; the aspect ratio fixes it from the height
	let resized = original.resize(u32::MAX, height, FilterType::Lanczos3);
	debug!("resized [{:.2}ms]", now.elapsed().as_millis());

	let mut output = Cursor::new(Vec::new());
	let now = std::time::Instant::now();
	resized.write_to(&mut output, format)?;
	debug!("written [{:.2}ms]", now.elapsed().as_millis());

	Ok(output.into_inner())
}

/// Resizes cover images to fixed-height variants, offloading the CPU-bound
/// decode/scale/encode to the shared worker pool.
#[derive(Clone, Debug)]
pub struct CoverResizer {
	worker: Arc<WorkerPool>,
}

impl CoverResizer {
	pub fn new(worker: Arc<WorkerPool>) -> Self {
		Self { worker }
	}

	/// Resize the cover at `source` to `height` pixels, preserving the aspect
	/// ratio, and write it to `destination`. The output format is chosen from
	/// the destination extension; an extension without an enabled encoder is
	/// reported up front as `CapabilityUnavailable`, before anything is read.
	///
	/// A failure after that point removes any partially written destination
	/// file and returns the original error.
	pub async fn resize(&self, source: &Path, destination: &Path, height: u32) -> CvResult<()> {
		let format = output_format(destination)?;

		let res = self.resize_inner(source, destination, format, height).await;
		if let Err(err) = res {
			warn!("Cover resize failed for {:?}: {}", destination, err);
			if tokio::fs::try_exists(destination).await.unwrap_or(false) {
				if let Err(remove_err) = tokio::fs::remove_file(destination).await {
					warn!("Failed to remove partial cover {:?}: {}", destination, remove_err);
				}
			}
			return Err(err);
		}
		Ok(())
	}

	async fn resize_inner(
		&self,
		source: &Path,
		destination: &Path,
		format: image::ImageFormat,
		height: u32,
	) -> CvResult<()> {
		let orig_buf = tokio::fs::read(source).await?;

		let resized = self
			.worker
			.try_run_immed(move || {
				info!("Resizing cover to height {}", height);
				Ok(resize_cover_sync(orig_buf, format, height)?)
			})
			.await?;

		tokio::fs::write(destination, resized).await?;
		Ok(())
	}
}

/// Encoder support check for the destination extension
fn output_format(destination: &Path) -> CvResult<image::ImageFormat> {
	let format = image::ImageFormat::from_path(destination)
		.map_err(|_| Error::CapabilityUnavailable(destination.to_string_lossy().into()))?;
	if !format.can_write() {
		return Err(Error::CapabilityUnavailable(destination.to_string_lossy().into()));
	}
	Ok(format)
}


// vim: ts=4
