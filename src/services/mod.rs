pub mod batch;
pub mod codec;
pub mod conversion;
pub mod corpus;
pub mod palette_builder;
pub mod tile_loader;

pub use batch::{BatchReport, BatchRunner};
pub use codec::{decode_image, encode_png, save_png};
pub use conversion::{ConversionPipeline, Renderer};
pub use corpus::{is_image_path, scan_images, IMAGE_EXTENSIONS};
pub use palette_builder::build_palette_from_dir;
pub use tile_loader::build_tile_library;
