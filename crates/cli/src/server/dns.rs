use authdns_domain::DomainError;
use authdns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

pub async fn start_dns_server(
    bind_addr: String,
    max_message_size: usize,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = create_udp_socket(socket_addr)?;

    info!(bind_address = %socket_addr, max_message_size, "DNS server ready");

    run_udp_loop(socket, handler, max_message_size, shutdown).await;
    Ok(())
}

/// Answers one datagram at a time until `shutdown` fires.
///
/// Errors are confined to the datagram that caused them.
async fn run_udp_loop(
    socket: UdpSocket,
    handler: DnsServerHandler,
    max_message_size: usize,
    shutdown: CancellationToken,
) {
    let mut recv_buf = vec![0u8; max_message_size];

    loop {
        let (n, from) = tokio::select! {
            _ = shutdown.cancelled() => {
                info!("DNS server shutting down");
                break;
            }
            result = socket.recv_from(&mut recv_buf) => match result {
                Ok(received) => received,
                Err(e) => {
                    let e = DomainError::Transport(e.to_string());
                    error!(error = %e, "UDP recv error");
                    continue;
                }
            },
        };

        debug!(client = %from, bytes = n, "Datagram received");

        let Some(response) = handler.handle_raw_udp(&recv_buf[..n], from).await else {
            continue;
        };

        if let Err(e) = socket.send_to(&response, from).await {
            let e = DomainError::Transport(e.to_string());
            error!(client = %from, error = %e, "UDP send error");
        }
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
