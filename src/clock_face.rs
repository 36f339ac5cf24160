//! The clock face: shows the time, and lets the user move the clock to another zone.
//!
//! The face has two modes. In [`Mode::Display`] it renders the time on every tick,
//! rewriting as little of the display as it can. A long press of the alarm button
//! switches to [`Mode::Settings`], where the light and alarm buttons browse the zone
//! table. A second long press (or the host's inactivity timeout) commits the browsed
//! zone: the clock is moved to the same instant expressed in the new zone and the
//! choice is saved. The mode button leaves without committing and moves on to the
//! next face.

use crate::battery::BatteryMonitor;
use crate::config::ClockConfig;
use crate::refresh::{PowerMode, RefreshPlan};
use crate::shared_constants::WEEKDAY_SLOT;
use crate::time_zone::{Direction, ZoneIndex};
use crate::watch::{Event, EventType, Indicator, SegmentDisplay, Separator, Watch, WatchFace};
use crate::watch_date_time::WatchDateTime;
use crate::zone_selector::{blink_on, reanchor, render_preview};

/// Which handler the next event goes to.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Showing the time.
    #[default]
    Display,
    /// Browsing the zone table.
    Settings,
}

/// State the clock face keeps between events, for as long as the host keeps the face.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    config: ClockConfig,
    face_index: u8,
    /// What is on the display now. `None` forces the next render to redraw everything.
    previous: Option<WatchDateTime>,
    battery: BatteryMonitor,
    hour_signal_enabled: bool,
    mode: Mode,
    zone: ZoneIndex,
}

impl ClockFace {
    /// A face in display mode, browsing starting from `zone`.
    #[must_use]
    pub const fn new(config: ClockConfig, face_index: u8, zone: ZoneIndex) -> Self {
        Self {
            config,
            face_index,
            previous: None,
            battery: BatteryMonitor::new(config.low_battery_millivolts()),
            hour_signal_enabled: false,
            mode: Mode::Display,
            zone,
        }
    }

    /// Like [`WatchFace::setup`], with an explicit configuration.
    pub fn setup_with_config<'a, W: Watch>(
        context: &'a mut Option<Self>,
        face_index: u8,
        watch: &W,
        config: ClockConfig,
    ) -> &'a mut Self {
        context.get_or_insert_with(|| {
            info!("Clock face {} set up", face_index);
            Self::new(config, face_index, watch.zone_index())
        })
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The zone being browsed (or last browsed).
    #[must_use]
    pub const fn zone_index(&self) -> ZoneIndex {
        self.zone
    }

    #[must_use]
    pub const fn previous(&self) -> Option<&WatchDateTime> {
        self.previous.as_ref()
    }

    #[must_use]
    pub const fn battery(&self) -> &BatteryMonitor {
        &self.battery
    }

    #[must_use]
    pub const fn face_index(&self) -> u8 {
        self.face_index
    }

    #[must_use]
    pub const fn config(&self) -> &ClockConfig {
        &self.config
    }

    #[must_use]
    pub const fn hour_signal_enabled(&self) -> bool {
        self.hour_signal_enabled
    }

    /// Turn the hourly-signal flag on or off and show it on the SIGNAL indicator.
    pub fn set_hour_signal(&mut self, enabled: bool, display: &mut impl SegmentDisplay) {
        self.hour_signal_enabled = enabled;
        display.set_indicator(Indicator::Signal, enabled);
    }

    fn handle_display_event<W: Watch>(&mut self, event: Event, watch: &mut W) -> bool {
        match event.event_type {
            EventType::LowEnergyUpdate => self.refresh(watch, PowerMode::LowPower),
            EventType::Tick | EventType::Activate => self.refresh(watch, PowerMode::Normal),
            EventType::AlarmLongPress => self.enter_settings(watch),
            _ => return watch.default_loop_handler(event),
        }
        true
    }

    fn handle_settings_event<W: Watch>(&mut self, event: Event, watch: &mut W) -> bool {
        match event.event_type {
            EventType::Activate | EventType::Tick | EventType::LowEnergyUpdate => {
                match render_preview(self.zone, blink_on(event.subsecond)) {
                    Ok(line) => watch.write_text(&line, WEEKDAY_SLOT),
                    Err(err) => error!("Clock: cannot show zone {}: {}", self.zone, err),
                }
            }
            EventType::AlarmButtonUp => self.zone = self.zone.advance(Direction::Forward),
            EventType::LightButtonUp => self.zone = self.zone.advance(Direction::Backward),
            // Swallowed so the host doesn't light the LED while browsing.
            EventType::LightButtonDown => {}
            EventType::Timeout | EventType::AlarmLongPress => self.commit_zone(watch),
            EventType::ModeButtonUp => {
                self.return_to_display(watch);
                watch.move_to_next_face();
            }
            _ => return watch.default_loop_handler(event),
        }
        true
    }

    fn refresh<W: Watch>(&mut self, watch: &mut W, power_mode: PowerMode) {
        let current = watch.date_time();
        match RefreshPlan::new(self.previous.as_ref(), &current, power_mode) {
            Ok(plan) => {
                plan.apply(watch);
                if plan.check_battery {
                    self.battery.check_if_due(current.day, watch);
                }
                self.previous = Some(current);
            }
            Err(err) => {
                error!("Clock: cannot render {}: {}", current, err);
                self.previous = None;
            }
        }
    }

    fn enter_settings<W: Watch>(&mut self, watch: &mut W) {
        watch.request_tick_frequency(self.config.settings_tick_hz());
        watch.set_separator(Separator::Blank);
        self.zone = watch.zone_index();
        self.mode = Mode::Settings;
        info!("Clock: browsing zones from {}", self.zone);
    }

    /// Move the clock to the browsed zone, keeping the instant, and save the choice.
    fn commit_zone<W: Watch>(&mut self, watch: &mut W) {
        let old_offset = watch.zone_index().zone().offset_minutes;
        let now = watch.date_time();
        match reanchor(self.zone, old_offset, &now) {
            Ok(date_time) => {
                watch.set_date_time(date_time);
                watch.set_zone_index(self.zone);
                info!(
                    "Clock: zone {} committed ({} -> {} minutes)",
                    self.zone,
                    old_offset,
                    self.zone.zone().offset_minutes
                );
            }
            Err(err) => error!("Clock: zone {} not committed: {}", self.zone, err),
        }
        self.return_to_display(watch);
    }

    fn return_to_display<W: Watch>(&mut self, watch: &mut W) {
        self.mode = Mode::Display;
        watch.request_tick_frequency(self.config.display_tick_hz());
        watch.set_separator(Separator::Colon);
        // The settings screen covered every slot.
        self.previous = None;
    }
}

impl<W: Watch> WatchFace<W> for ClockFace {
    fn setup<'a>(context: &'a mut Option<Self>, face_index: u8, watch: &W) -> &'a mut Self {
        Self::setup_with_config(context, face_index, watch, ClockConfig::default())
    }

    fn activate(&mut self, watch: &mut W) {
        watch.set_separator(Separator::Colon);
        watch.set_indicator(Indicator::Signal, self.hour_signal_enabled);
        self.battery.indicate(watch);
        self.previous = None;
    }

    fn handle_event(&mut self, event: Event, watch: &mut W) -> bool {
        match self.mode {
            Mode::Display => self.handle_display_event(event, watch),
            Mode::Settings => self.handle_settings_event(event, watch),
        }
    }

    fn resign(&mut self, _watch: &mut W) {
        debug!("Clock: resigned in {}", self.mode);
    }
}
