//! Control panel drawn with egui on top of the scene.
//!
//! The panel edits [`GridParams`] directly through their bounds, so no widget
//! state is kept outside the parameter struct.

use std::sync::Arc;
use winit::window::Window;

use crate::params::{Bounded, GridParams};

/// Button pressed on the panel this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    None,
    Save,
    Load,
    Reset,
}

/// Draw the parameter panel and frame-rate readout.
///
/// # Arguments
/// * `ctx` - egui context for the current pass
/// * `params` - Parameters edited in place
/// * `fps` - Frame rate shown in the corner
/// * `show_panel` - Whether the panel itself is visible (the readout always is)
/// * `panel_width` - Default panel width (logical pixels)
pub fn control_panel(
    ctx: &egui::Context,
    params: &mut GridParams,
    fps: f32,
    show_panel: bool,
    panel_width: f32,
) -> PanelAction {
    let mut action = PanelAction::None;

    if show_panel {
        egui::Window::new("Noise Grid")
            .default_width(panel_width)
            .resizable(false)
            .show(ctx, |ui| {
                slider(ui, "Frequency", &mut params.frequency);
                slider(ui, "Time Frequency", &mut params.time_frequency);
                slider(ui, "Magnitude", &mut params.magnitude);
                slider(ui, "Grid Size", &mut params.grid_size);
                slider(ui, "Grid Resolution", &mut params.resolution);

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        action = PanelAction::Save;
                    }
                    if ui.button("Load").clicked() {
                        action = PanelAction::Load;
                    }
                    if ui.button("Reset").clicked() {
                        action = PanelAction::Reset;
                    }
                });
                ui.label("Tab: hide panel   F: fullscreen");
            });
    }

    egui::Area::new(egui::Id::new("fps_readout"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-6.0, -4.0])
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(format!("{:.1}", fps));
        });

    action
}

fn slider<T>(ui: &mut egui::Ui, label: &str, value: &mut Bounded<T>)
where
    T: egui::emath::Numeric,
{
    let range = value.range();
    ui.add(egui::Slider::new(value.value_mut(), range).text(label));
    value.clamp();
}

/// Output from one GUI pass, ready to paint.
pub struct GuiFrame {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

/// egui context, winit input state, and wgpu renderer
pub struct GuiLayer {
    pub ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl GuiLayer {
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        window: &Arc<Window>,
    ) -> Self {
        let ctx = egui::Context::default();

        let mut style = egui::Style::default();
        style.visuals = egui::Visuals::dark();
        style.visuals.window_shadow = egui::Shadow::NONE;
        ctx.set_style(style);

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        // The GUI pass draws without depth, after the scene
        let renderer = egui_wgpu::Renderer::new(device, output_format, None, 1, false);

        Self {
            ctx,
            state,
            renderer,
        }
    }

    /// Feed a window event. Returns true if egui consumed it.
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Whether the pointer is over a GUI element (camera should ignore it)
    pub fn wants_pointer(&self) -> bool {
        self.ctx.wants_pointer_input() || self.ctx.is_pointer_over_area()
    }

    /// Run one GUI pass
    pub fn run(&mut self, window: &Window, ui: impl FnMut(&egui::Context)) -> GuiFrame {
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, ui);

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        GuiFrame {
            paint_jobs,
            textures_delta: full_output.textures_delta,
            pixels_per_point: full_output.pixels_per_point,
        }
    }

    /// Upload textures and buffers, then draw over `view`.
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        frame: &GuiFrame,
        size_in_pixels: [u32; 2],
    ) -> Vec<wgpu::CommandBuffer> {
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: frame.pixels_per_point,
        };

        for (id, image_delta) in &frame.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }
        let extra_commands =
            self.renderer
                .update_buffers(device, queue, encoder, &frame.paint_jobs, &screen);

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            self.renderer
                .render(&mut render_pass, &frame.paint_jobs, &screen);
        }

        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }

        extra_commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_panel(params: &mut GridParams, show_panel: bool) -> PanelAction {
        let ctx = egui::Context::default();
        let mut action = PanelAction::None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            action = control_panel(ctx, params, 60.0, show_panel, 260.0);
        });
        action
    }

    #[test]
    fn test_panel_without_input_changes_nothing() {
        let mut params = GridParams::default();
        let action = run_panel(&mut params, true);

        assert_eq!(action, PanelAction::None);
        assert_eq!(params, GridParams::default());
    }

    #[test]
    fn test_hidden_panel_leaves_params_alone() {
        let mut params = GridParams::default();
        params.magnitude.set(4.0);

        assert_eq!(run_panel(&mut params, false), PanelAction::None);
        assert_eq!(params.magnitude.get(), 4.0);
    }

    #[test]
    fn test_slider_clamps_out_of_range_edit() {
        let mut params = GridParams::default();
        *params.resolution.value_mut() = 1000;

        run_panel(&mut params, true);
        assert_eq!(params.resolution.get(), 100);
    }
}
