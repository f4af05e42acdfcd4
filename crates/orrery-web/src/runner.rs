use orrery_engine::{
    BodyCatalog, FrameBuffer, FrameLayout, FrameStatus, InfoOverlay, InputEvent, Result, SimConfig,
    SimContext, SpherePicker,
};

/// Owns the simulation and the shared frame buffer for one page.
///
/// Generic over the overlay so the loop can run without a DOM; the exported
/// functions in `lib.rs` use it with `DomOverlay`.
pub struct SimRunner<O: InfoOverlay> {
    ctx: SimContext<FrameBuffer, O, SpherePicker>,
    catalog_json: String,
}

impl<O: InfoOverlay> SimRunner<O> {
    pub fn new(config: SimConfig, catalog: BodyCatalog, overlay: O) -> Result<Self> {
        // The buffer is sized from the config before the context sees it.
        config.validate()?;
        let catalog_json = catalog.to_json()?;
        let registry = catalog.into_registry()?;

        let mut frame = FrameBuffer::new(FrameLayout::from_config(&config));
        frame.register_bodies(&registry)?;

        let ctx = SimContext::new(config, registry, frame, overlay, SpherePicker::default())?;
        let mut runner = Self { ctx, catalog_json };
        runner.write_status();
        Ok(runner)
    }

    fn write_status(&mut self) {
        let status = FrameStatus::capture(&self.ctx);
        self.ctx.sink_mut().write_status(&status);
    }

    /// Run one rendered frame and publish the result.
    pub fn frame(&mut self, dt: f32) {
        self.ctx.frame(dt);
        self.write_status();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.ctx.push_input(event);
    }

    pub fn set_speed(&mut self, name: &str, value: f64) {
        self.ctx.set_speed_multiplier(name, value);
    }

    pub fn set_global_speed(&mut self, value: f64) {
        self.ctx.set_global_speed(value);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.ctx.set_global_pause(paused);
    }

    pub fn reset_focus(&mut self) {
        self.ctx.request_focus_reset();
    }

    pub fn select_body(&mut self, name: &str) -> bool {
        self.ctx.select_body(name)
    }

    pub fn context(&self) -> &SimContext<FrameBuffer, O, SpherePicker> {
        &self.ctx
    }

    // ---- Data accessors ----

    pub fn catalog_json(&self) -> &str {
        &self.catalog_json
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.ctx.sink().as_ptr()
    }

    pub fn buffer_len_floats(&self) -> u32 {
        self.ctx.sink().len_floats() as u32
    }

    pub fn body_count(&self) -> u32 {
        self.ctx.sink().body_count() as u32
    }

    pub fn max_bodies(&self) -> u32 {
        self.ctx.sink().layout().max_bodies as u32
    }

    pub fn decor_time(&self) -> f32 {
        self.ctx.decor_time()
    }
}
