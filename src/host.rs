//! Capabilities the CORS stage needs from the pipeline hosting it.

/// Read-only access to the inbound request.
pub trait RequestView {
    fn method(&self) -> &str;

    /// First value of the named header. Lookup ignores the case of `name`.
    fn header(&self, name: &str) -> Option<&str>;
}

/// Mutable access to the outbound response.
pub trait ResponseView {
    fn contains(&self, name: &str) -> bool;

    fn get_first(&self, name: &str) -> Option<&str>;

    /// Replaces every existing value of `name` with `value`.
    fn set(&mut self, name: &str, value: String);

    fn remove(&mut self, name: &str);

    fn status(&self) -> u16;

    fn set_status(&mut self, status: u16);
}

/// Continuation handing control to the next pipeline stage.
///
/// The host stalls if a stage never calls [`PolicyChain::do_next`].
pub trait PolicyChain<Req: ?Sized, Res: ?Sized> {
    fn do_next(&mut self, request: &Req, response: &mut Res);
}

impl<Req, Res, F> PolicyChain<Req, Res> for F
where
    Req: ?Sized,
    Res: ?Sized,
    F: FnMut(&Req, &mut Res),
{
    fn do_next(&mut self, request: &Req, response: &mut Res) {
        self(request, response)
    }
}
