//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The line-list pipeline and its buffers
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use polyhedra_core::Shape;
use polyhedra_input::InteractionState;
use polyhedra_render::{
    context::{ContextError, RenderContext},
    pipeline::{LinePipeline, LineUniforms},
    project_shape, LineGeometry, ProjectedVertex, ProjectionParams,
};
use crate::config::WindowConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

impl RenderError {
    /// Whether the next frame may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, RenderError::SurfaceLost | RenderError::Other(_))
    }
}

fn to_wgpu_color(c: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: c[0] as f64,
        g: c[1] as f64,
        b: c[2] as f64,
        a: c[3] as f64,
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: LinePipeline,
    geometry: LineGeometry,
    projected: Vec<ProjectedVertex>,
    uploaded: Option<usize>,
    background: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(window: Arc<Window>, config: &WindowConfig) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window, config.vsync))?;
        let pipeline = LinePipeline::new(&context.device, context.config.format);
        pipeline.update_uniforms(
            &context.queue,
            &LineUniforms {
                color: config.line_color,
            },
        );

        Ok(Self {
            context,
            pipeline,
            geometry: LineGeometry::default(),
            projected: Vec::new(),
            uploaded: None,
            background: to_wgpu_color(config.background_color),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Build index and vertex buffers for a newly selected shape
    fn upload_shape(&mut self, index: usize, shape: &Shape) {
        self.geometry = LineGeometry::from_shape(shape);
        self.pipeline.upload_shape(&self.context.device, &self.geometry);
        self.uploaded = Some(index);
        log::info!(
            "Uploaded {}: {} vertices, {} edges",
            shape.name(),
            shape.vertex_count(),
            shape.edge_count()
        );
    }

    /// Render a single frame of the shape at catalog position `index`
    pub fn render_frame(
        &mut self,
        index: usize,
        shape: &Shape,
        state: &InteractionState,
    ) -> Result<(), RenderError> {
        if self.uploaded != Some(index) {
            self.upload_shape(index, shape);
        }

        let size = self.context.size;
        let params = ProjectionParams::ndc(size.width, size.height);
        project_shape(shape, state, &params, &mut self.projected);
        self.geometry.update(&self.projected);
        self.pipeline.update_vertices(&self.context.queue, &self.geometry);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, self.background);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
