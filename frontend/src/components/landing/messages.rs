#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// First render: starts the title effect when it is compiled in.
    Init,
    OpenModal,
    CloseModal,
    UpdateInput(String),
    GoToCharacter,
    #[cfg(feature = "title-glitch")]
    Glitch,
    #[cfg(feature = "title-glitch")]
    RestoreTitle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Leave the landing page for `url`.
    Navigate(String),
    After { delay_ms: u32, msg: Msg },
}
