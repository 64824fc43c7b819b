use crate::model::Status;

/// Temporizador de un segundo ligado al estado del quiz.
///
/// Trabaja con el reloj monótono de egui (`f64` en segundos) para funcionar
/// igual en escritorio y en web. Solo emite mientras el estado es `Active`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ticker {
    last_tick: Option<f64>,
}

impl Ticker {
    /// Arranca al entrar en `Active` y se detiene al salir de él.
    pub fn sync(&mut self, status: Status, now: f64) {
        match (status == Status::Active, self.last_tick) {
            (true, None) => {
                log::debug!("ticker arrancado");
                self.last_tick = Some(now);
            }
            (false, Some(_)) => {
                log::debug!("ticker detenido ({status:?})");
                self.last_tick = None;
            }
            _ => {}
        }
    }

    pub fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Segundos completos transcurridos desde el último tick emitido.
    /// Si la app estuvo congelada varios segundos se devuelven todos de golpe.
    pub fn poll(&mut self, now: f64) -> u32 {
        let Some(last) = self.last_tick else {
            return 0;
        };
        let elapsed = now - last;
        if elapsed < 1.0 {
            return 0;
        }
        let ticks = elapsed.floor();
        self.last_tick = Some(last + ticks);
        ticks as u32
    }

    /// Cuánto falta para el próximo tick (para programar el repintado).
    pub fn until_next_tick(&self, now: f64) -> Option<f64> {
        self.last_tick
            .map(|last| (last + 1.0 - now).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_outside_active() {
        let mut ticker = Ticker::default();
        ticker.sync(Status::Ready, 0.0);
        assert!(!ticker.is_running());
        assert_eq!(ticker.poll(10.0), 0);
        assert_eq!(ticker.until_next_tick(10.0), None);
    }

    #[test]
    fn emits_one_tick_per_whole_second() {
        let mut ticker = Ticker::default();
        ticker.sync(Status::Active, 100.0);
        assert_eq!(ticker.poll(100.5), 0);
        assert_eq!(ticker.poll(101.0), 1);
        assert_eq!(ticker.poll(101.9), 0);
        assert_eq!(ticker.poll(102.2), 1);
    }

    #[test]
    fn catches_up_after_a_stall() {
        let mut ticker = Ticker::default();
        ticker.sync(Status::Active, 0.0);
        assert_eq!(ticker.poll(3.5), 3);
        // El resto (0.5 s) cuenta para el siguiente
        assert_eq!(ticker.poll(4.0), 1);
    }

    #[test]
    fn stops_when_leaving_active_and_restarts_fresh() {
        let mut ticker = Ticker::default();
        ticker.sync(Status::Active, 0.0);
        ticker.sync(Status::Finished, 0.7);
        assert!(!ticker.is_running());
        assert_eq!(ticker.poll(5.0), 0);

        ticker.sync(Status::Active, 10.0);
        assert_eq!(ticker.poll(10.9), 0);
        assert_eq!(ticker.poll(11.0), 1);
    }

    #[test]
    fn resync_while_active_keeps_phase() {
        let mut ticker = Ticker::default();
        ticker.sync(Status::Active, 0.0);
        ticker.sync(Status::Active, 0.8);
        assert_eq!(ticker.poll(1.0), 1);
        assert_eq!(ticker.until_next_tick(1.25), Some(0.75));
    }
}
